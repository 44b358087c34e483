/// Tab title for a tab key. Unknown keys fall back to a generic title.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a003_dc_stock" => "DC stock",
        "a004_bgs_stock_request" => "BGS stock requests",
        "a005_pallet_deposit" => "Pallet deposits",
        "a006_pallet_counting" => "Pallet counting",
        "a007_trolley_type" => "Trolley types",
        "a008_trolley" => "Trolleys",
        "a009_transaction" => "Transactions",
        "a010_uniform_condition" => "Uniform conditions",
        "p900_payroll" => "Payroll",
        _ => "Page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_keys() {
        assert_eq!(tab_label_for_key("a008_trolley"), "Trolleys");
        assert_eq!(tab_label_for_key("nope"), "Page");
    }
}
