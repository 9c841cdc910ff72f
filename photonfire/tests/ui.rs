//! UI tests for `#[photonfire_service]` using trybuild.
//!
//! Each case must expand to code that compiles.

#[test]
fn ui_tests() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
}
