use volna_wire::{Params, ToParams};

volna_wire::params! {
    /// Exercises every field mode and value kind.
    pub struct SampleParams {
        req owner_id: i64 = "owner_id",
        req query: String = "q",
        opt user_id: i64 = "user_id",
        opt count: i64 = "count",
        opt order: String = "order",
        opt extended: bool = "extended",
        opt fields: Vec<String> = "fields",
        opt ids: Vec<i64> = "ids",
    }
}

fn pairs(params: &SampleParams) -> Vec<(&'static str, String)> {
    params.to_params().into_pairs()
}

// ── Omission rules ────────────────────────────────────────────────────────────

#[test]
fn optional_fields_omitted_at_default() {
    let p = pairs(&SampleParams::default());
    // Only the required fields survive, even though both hold defaults.
    assert_eq!(p, vec![("owner_id", "0".to_owned()), ("q", String::new())]);
}

#[test]
fn optional_fields_sent_when_set() {
    let params = SampleParams {
        user_id: 1,
        count: 5,
        ..Default::default()
    };
    let encoded = params.to_params();
    assert_eq!(encoded.get("user_id"), Some("1"));
    assert_eq!(encoded.get("count"), Some("5"));
    assert_eq!(encoded.get("order"), None);
    assert_eq!(encoded.get("extended"), None);
}

#[test]
fn required_fields_always_present() {
    let encoded = SampleParams { owner_id: -42, ..Default::default() }.to_params();
    assert_eq!(encoded.get("owner_id"), Some("-42"));
    assert_eq!(encoded.get("q"), Some(""));
}

// ── Booleans ──────────────────────────────────────────────────────────────────

#[test]
fn true_encodes_as_one() {
    let encoded = SampleParams { extended: true, ..Default::default() }.to_params();
    assert_eq!(encoded.get("extended"), Some("1"));
}

#[test]
fn false_is_absent_never_zero() {
    let encoded = SampleParams { extended: false, ..Default::default() }.to_params();
    assert_eq!(encoded.get("extended"), None);
    assert!(encoded.iter().all(|(_, v)| v != "0"));
}

// ── Lists ─────────────────────────────────────────────────────────────────────

#[test]
fn string_list_joins_in_order() {
    let params = SampleParams {
        fields: vec!["first_name".into(), "last_name".into(), "online".into()],
        ..Default::default()
    };
    assert_eq!(params.to_params().get("fields"), Some("first_name,last_name,online"));
}

#[test]
fn int_list_joins_in_order() {
    let params = SampleParams { ids: vec![3, 1, 2], ..Default::default() };
    assert_eq!(params.to_params().get("ids"), Some("3,1,2"));
}

#[test]
fn empty_list_key_is_absent() {
    let encoded = SampleParams::default().to_params();
    assert_eq!(encoded.get("fields"), None);
    assert_eq!(encoded.get("ids"), None);
}

#[test]
fn embedded_commas_pass_through_unescaped() {
    // Documented limitation: no escaping scheme exists upstream.
    let params = SampleParams {
        fields: vec!["a,b".into(), "c".into()],
        ..Default::default()
    };
    assert_eq!(params.to_params().get("fields"), Some("a,b,c"));
}

// ── Params container ──────────────────────────────────────────────────────────

#[test]
fn pairs_keep_insertion_order() {
    let mut params = Params::new();
    params.required("b", &1i64);
    params.required("a", &2i64);
    let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["b", "a"]);
}
