//! 独立的测试进程：观察从未写入过的全局策略。
//!
//! 本文件只能有这一个测试，否则其他测试的写入会污染初始状态。

use tarn_diagnostics::{is_unused_fatal, is_unused_non_fatal, SeverityPolicy};

#[test]
fn fresh_process_treats_unused_as_warning() {
    assert!(is_unused_non_fatal());
    assert!(!is_unused_fatal());
    assert_eq!(SeverityPolicy::current(), SeverityPolicy::default());
}
