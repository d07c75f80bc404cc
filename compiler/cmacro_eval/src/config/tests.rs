use super::*;
use pretty_assertions::assert_eq;

fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |name| {
        pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_owned())
    }
}

#[test]
fn defaults() {
    let config = EvalConfig::default();
    assert_eq!(config.data_model, DataModel::Lp64);
    assert_eq!(config.max_reference_depth, 32);
}

#[test]
fn builder_methods() {
    let config = EvalConfig::default()
        .with_data_model(DataModel::Llp64)
        .with_max_reference_depth(4);
    assert_eq!(config.data_model, DataModel::Llp64);
    assert_eq!(config.max_reference_depth, 4);
}

#[test]
fn reads_variables() {
    let config = EvalConfig::from_vars(vars(&[
        ("CMACRO_DATA_MODEL", "LLP64"),
        ("CMACRO_MAX_DEPTH", " 8 "),
    ]));
    assert_eq!(config.data_model, DataModel::Llp64);
    assert_eq!(config.max_reference_depth, 8);
}

#[test]
fn unset_variables_keep_defaults() {
    assert_eq!(EvalConfig::from_vars(vars(&[])), EvalConfig::default());
}

#[test]
fn invalid_values_are_ignored() {
    let config = EvalConfig::from_vars(vars(&[
        ("CMACRO_DATA_MODEL", "ilp32"),
        ("CMACRO_MAX_DEPTH", "deep"),
    ]));
    assert_eq!(config, EvalConfig::default());
}
