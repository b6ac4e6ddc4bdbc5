use crate::rules::RuleTable;
use crate::scores::CodeRecommendation;

pub fn recommend(gene_count: u16) -> CodeRecommendation {
    recommend_with(&RuleTable::builtin(), gene_count)
}

pub fn recommend_with(rules: &RuleTable, gene_count: u16) -> CodeRecommendation {
    let tier = rules.tier_for(gene_count);
    CodeRecommendation {
        cpt_code: tier.cpt_code.to_string(),
        base_reimbursement: tier.base_reimbursement,
        warning_text: tier.warning.to_string(),
        flagged_payers: tier.flagged_payers.iter().map(|p| p.to_string()).collect(),
    }
}
