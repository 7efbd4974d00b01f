//! Festival, samvatsara and weekday names (Harvard-Kyoto).

pub const KARADAIYAN_NOMBU: &str = "ta:kAraDaiyAn2 nOn2bu";
pub const KUCHELA_DINAM: &str = "kucEla-dinam";
pub const PANCHANGA_PATHANAM: &str = "paJcAGga-paThanam";
pub const VYATIPATA_SHRADDHAM: &str = "vyatIpAta-zrAddham";
pub const MAHA_VYATIPATA_SHRADDHAM: &str = "mahAvyatIpAta-zrAddham";
pub const MAHADHANUR_VYATIPATA_SHRADDHAM: &str = "mahAdhanurvyatIpAta-zrAddham";
pub const MAHODAYA: &str = "mahOdaya-puNyakAlaH";
pub const ARDHODAYA: &str = "ardhOdaya-puNyakAlaH";
pub const DAKSHINAYANA: &str = "dakSiNAyana-puNyakAlaH";
pub const UTTARAYANA: &str = "uttarAyaNa-puNyakAlaH/mitrOtsavaH";
pub const GAJACHHAYA: &str = "gajacchAyA-yOgaH";

/// Separator between a name and the time range or instant it carries.
pub const TIME_ARROW: char = '►';

/// The 60-year cycle, Prabhava first.
pub const SAMVATSARA_NAMES: [&str; 60] = [
    "prabhava", "vibhava", "zukla", "pramOda", "prajApati", "aGgirasa", "zrImukha", "bhAva",
    "yuva", "dhAtR", "Izvara", "bahudhAnya", "pramAthI", "vikrama", "vRSa", "citrabhAnu",
    "svabhAnu", "tAraNa", "pArthiva", "vyaya", "sarvajit", "sarvadhArI", "virOdhI", "vikRti",
    "khara", "nandana", "vijaya", "jaya", "manmatha", "durmukhI", "hEvilambI", "vilambI",
    "vikArI", "zArvarI", "plava", "zubhakRt", "zObhakRt", "krOdhI", "vizvAvasu", "parAbhava",
    "plavaGga", "kIlaka", "saumya", "sAdhAraNa", "virOdhikRt", "paridhAvI", "pramAdI", "Ananda",
    "rAkSasa", "nala", "piGgala", "kAlayukti", "siddhArthI", "raudra", "durmati", "dundubhi",
    "rudhirOdgArI", "raktAkSI", "krOdhana", "akSaya",
];

/// CE 1987 began Prabhava.
const SAMVATSARA_EPOCH_YEAR: i32 = 1987;

/// Samvatsara starting at the Mesha sankranti of CE `year`: (1-based order, name).
pub fn samvatsara_for_year(year: i32) -> (u32, &'static str) {
    let idx = (year - SAMVATSARA_EPOCH_YEAR).rem_euclid(60) as usize;
    (idx as u32 + 1, SAMVATSARA_NAMES[idx])
}

/// Mesha sankranti entry carrying the new samvatsara.
pub fn mesha_sankranti_name(year: i32) -> String {
    let (_, samvatsara) = samvatsara_for_year(year);
    format!("mESa-saGkrAntiH~({samvatsara}-saMvatsaraH)")
}

/// Weekday names, Sunday = 0.
pub const VAARA_NAMES: [&str; 7] = [
    "ravivAsaraH", "sOmavAsaraH", "maGgalavAsaraH", "budhavAsaraH", "guruvAsaraH",
    "zukravAsaraH", "zanivAsaraH",
];
