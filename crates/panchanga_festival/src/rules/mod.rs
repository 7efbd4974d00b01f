//! The fixed rule registry.
//!
//! Order matters: assignments made by later rules replace earlier ones, and
//! reclassification reads everything emitted before it.

mod combined;
mod lunar;
mod reclassify;
mod solar;

use crate::rule_types::{Rule, RuleFamily, RuleId, RuleKind};

pub use combined::gajachhaya_name;

/// Every rule, in evaluation order.
pub fn registry() -> Vec<Rule> {
    vec![
        Rule {
            id: RuleId::KaradaiyanNombu,
            family: RuleFamily::Solar,
            kind: RuleKind::Daily(solar::karadaiyan_nombu),
        },
        Rule {
            id: RuleId::KuchelaDinam,
            family: RuleFamily::Solar,
            kind: RuleKind::Daily(solar::kuchela_dinam),
        },
        Rule {
            id: RuleId::MeshaSankranti,
            family: RuleFamily::Solar,
            kind: RuleKind::Daily(solar::mesha_sankranti),
        },
        Rule {
            id: RuleId::VyatipataShraddham,
            family: RuleFamily::Lunar,
            kind: RuleKind::Daily(lunar::vyatipata_shraddham),
        },
        Rule {
            id: RuleId::MahodayaArdhodaya,
            family: RuleFamily::Lunar,
            kind: RuleKind::Daily(lunar::mahodaya_ardhodaya),
        },
        Rule {
            id: RuleId::Ayana,
            family: RuleFamily::Solar,
            kind: RuleKind::Daily(solar::ayana),
        },
        Rule {
            id: RuleId::Gajachhaya,
            family: RuleFamily::Combined,
            kind: RuleKind::Daily(combined::gajachhaya),
        },
        Rule {
            id: RuleId::VisheshaVyatipata,
            family: RuleFamily::Reclassification,
            kind: RuleKind::Reclassify(reclassify::vishesha_vyatipata),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_is_fixed() {
        let ids: Vec<RuleId> = registry().iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                RuleId::KaradaiyanNombu,
                RuleId::KuchelaDinam,
                RuleId::MeshaSankranti,
                RuleId::VyatipataShraddham,
                RuleId::MahodayaArdhodaya,
                RuleId::Ayana,
                RuleId::Gajachhaya,
                RuleId::VisheshaVyatipata,
            ]
        );
    }

    #[test]
    fn reclassification_runs_last() {
        let rules = registry();
        let last = rules.last().unwrap();
        assert_eq!(last.family, RuleFamily::Reclassification);
        assert!(matches!(last.kind, RuleKind::Reclassify(_)));
        assert!(
            rules[..rules.len() - 1]
                .iter()
                .all(|r| matches!(r.kind, RuleKind::Daily(_)))
        );
    }
}
