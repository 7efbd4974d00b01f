//! Harvard-Kyoto names of anga values, indexed from 1.

/// Tithi names, shukla paksha then krishna paksha.
pub const TITHI_NAMES: [&str; 30] = [
    "zukla-prathamA", "zukla-dvitIyA", "zukla-tRtIyA", "zukla-caturthI", "zukla-paJcamI",
    "zukla-SaSThI", "zukla-saptamI", "zukla-aSTamI", "zukla-navamI", "zukla-dazamI",
    "zukla-EkAdazI", "zukla-dvAdazI", "zukla-trayOdazI", "zukla-caturdazI", "pUrNimA",
    "kRSNa-prathamA", "kRSNa-dvitIyA", "kRSNa-tRtIyA", "kRSNa-caturthI", "kRSNa-paJcamI",
    "kRSNa-SaSThI", "kRSNa-saptamI", "kRSNa-aSTamI", "kRSNa-navamI", "kRSNa-dazamI",
    "kRSNa-EkAdazI", "kRSNa-dvAdazI", "kRSNa-trayOdazI", "kRSNa-caturdazI", "amAvAsyA",
];

pub const NAKSHATRA_NAMES: [&str; 27] = [
    "azvinI", "bharaNI", "kRttikA", "rOhiNI", "mRgazIrSa", "ArdrA", "punarvasu", "puSya",
    "AzlESA", "maghA", "pUrvaphalgunI", "uttaraphalgunI", "hasta", "citrA", "svAtI",
    "vizAkhA", "anurAdhA", "jyESThA", "mUla", "pUrvASADhA", "uttarASADhA", "zravaNa",
    "dhaniSThA", "zatabhiSaj", "pUrvabhAdrapadA", "uttarabhAdrapadA", "rEvatI",
];

pub const YOGA_NAMES: [&str; 27] = [
    "viSkambha", "prIti", "AyuSmAn", "saubhAgya", "zObhana", "atigaNDa", "sukarma", "dhRti",
    "zUla", "gaNDa", "vRddhi", "dhruva", "vyAghAta", "harSaNa", "vajra", "siddhi", "vyatIpAta",
    "varIyAn", "parigha", "ziva", "siddha", "sAdhya", "zubha", "zukla", "brahma", "aindra",
    "vaidhRti",
];

pub const RAASHI_NAMES: [&str; 12] = [
    "mESa", "vRSabha", "mithuna", "karkaTa", "siMha", "kanyA", "tulA", "vRzcika", "dhanuH",
    "makara", "kumbha", "mIna",
];

/// Lunar (amanta) month names, Chaitra = 1.
pub const LUNAR_MONTH_NAMES: [&str; 12] = [
    "caitra", "vaizAkha", "jyESTha", "ASADha", "zrAvaNa", "bhAdrapada", "Azvayuja", "kArtika",
    "mArgazIrSa", "pauSa", "mAgha", "phAlguna",
];

/// Ritu-masa names of the tropical solar months, madhu = 1.
pub const RTU_MASA_NAMES: [&str; 12] = [
    "madhuH", "mAdhavaH", "zukraH", "zuciH", "nabhaH", "nabhasyaH", "iSaH", "UrjaH", "sahaH",
    "sahasyaH", "tapaH", "tapasyaH",
];

/// Karana name for a 1-based karana index (1..=60).
///
/// Index 1 is kimstughna, 58..=60 are shakuni, chatushpada and naga; the
/// seven movable karanas repeat over 2..=57.
pub fn karana_name(index: u32) -> Option<&'static str> {
    const MOVABLE: [&str; 7] = [
        "bava", "bAlava", "kaulava", "taitila", "garaja", "vaNija", "viSTi",
    ];
    match index {
        1 => Some("kiMstughna"),
        2..=57 => Some(MOVABLE[((index - 2) % 7) as usize]),
        58 => Some("zakuni"),
        59 => Some("catuSpAda"),
        60 => Some("nAga"),
        _ => None,
    }
}

/// Look up a 1-based name in a table.
pub fn name_at(table: &'static [&'static str], index: u32) -> Option<&'static str> {
    let i = usize::try_from(index).ok()?.checked_sub(1)?;
    table.get(i).copied()
}
