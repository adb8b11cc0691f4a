//! 驱动从未写入策略：独立进程，只能有这一个测试。

use tarn_driver::{CompileOptions, Session};

#[test]
fn unused_local_compiles_with_one_warning_when_policy_is_untouched() {
    let session = Session::new(&CompileOptions::default());
    assert!(session.policy().is_unused_non_fatal());

    let output = session
        .compile("func main() { var x = 1; return 0; }")
        .expect("unused locals are warnings by default");

    assert_eq!(output.warnings.len(), 1);
    assert!(output.warnings[0].level.is_warning());
    assert_eq!(output.warnings[0].message, "declared and not used: x");
    assert!(!output.object.is_empty());
}
