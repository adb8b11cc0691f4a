//! Tarn Compiler Driver
//!
//! 编译器驱动模块，串联所有编译阶段：
//! 词法 + 语法分析 → 语义分析 → 代码生成。
//!
//! 未使用实体的严重级别以 [`SeverityPolicy`] 值的形式显式传入，
//! 通常来自 [`Session`]。

pub mod error;
pub mod session;

pub use error::{CompileError, CompileResult};
pub use session::{CompileOptions, Session, UnusedOverride};

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tarn_codegen::emit_object;
use tarn_diagnostics::{Diagnostic, Emitter, SeverityPolicy};
use tarn_sema::analyze;
use tarn_syntax::ast::Program;

/// 编译结果
#[derive(Debug)]
pub struct CompilationOutput {
    /// 生成的目标文件文本
    pub object: String,
    /// 警告信息
    pub warnings: Vec<Diagnostic>,
}

/// 单个文件的检查结果
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    /// 读取成功时的源码，用于渲染诊断
    pub source: Option<String>,
    /// 成功时为警告列表
    pub result: CompileResult<Vec<Diagnostic>>,
}

impl FileReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// 解析源代码
fn parse_source(source: &str) -> CompileResult<Program> {
    tarn_syntax::parse(source).map_err(CompileError::from_syntax)
}

/// 解析并做语义分析，返回警告
fn analyze_source(
    source: &str,
    policy: SeverityPolicy,
) -> CompileResult<(Program, Vec<Diagnostic>)> {
    let ast = parse_source(source)?;
    let analysis = analyze(&ast, policy)?;
    let warnings = analysis.warnings.iter().map(|w| w.to_diagnostic()).collect();
    Ok((ast, warnings))
}

/// 编译 Tarn 源代码
///
/// # Returns
/// * `Ok(CompilationOutput)` - 编译成功，返回目标文件和警告
/// * `Err(CompileError)` - 编译失败，不会生成目标文件
///
/// # Example
/// ```
/// use tarn_diagnostics::SeverityPolicy;
/// use tarn_driver::compile;
///
/// let source = "func main() { var x = 1; }";
///
/// let output = compile(source, SeverityPolicy::warn()).unwrap();
/// assert_eq!(output.warnings.len(), 1);
///
/// assert!(compile(source, SeverityPolicy::deny()).is_err());
/// ```
pub fn compile(source: &str, policy: SeverityPolicy) -> CompileResult<CompilationOutput> {
    let (ast, warnings) = analyze_source(source, policy)?;
    let object = emit_object(&ast)?;
    tracing::debug!(bytes = object.len(), warnings = warnings.len(), "object emitted");

    Ok(CompilationOutput { object, warnings })
}

/// 只做检查，不生成代码
pub fn check(source: &str, policy: SeverityPolicy) -> CompileResult<Vec<Diagnostic>> {
    analyze_source(source, policy).map(|(_, warnings)| warnings)
}

/// 从文件编译
pub fn compile_file(
    path: impl AsRef<Path>,
    policy: SeverityPolicy,
) -> CompileResult<CompilationOutput> {
    let source = std::fs::read_to_string(path)?;
    compile(&source, policy)
}

/// 并行检查多个文件
///
/// 每个工作线程使用同一个策略快照，不读取全局策略。结果顺序与输入一致。
pub fn check_files(paths: &[PathBuf], policy: SeverityPolicy) -> Vec<FileReport> {
    tracing::debug!(files = paths.len(), "checking files in parallel");

    paths
        .par_iter()
        .map(|path| match std::fs::read_to_string(path) {
            Ok(source) => {
                let result = check(&source, policy);
                FileReport {
                    path: path.clone(),
                    source: Some(source),
                    result,
                }
            }
            Err(err) => FileReport {
                path: path.clone(),
                source: None,
                result: Err(err.into()),
            },
        })
        .collect()
}

/// 输出一组诊断，有源码时带上下文
pub fn emit_diagnostics(emitter: &Emitter, diagnostics: &[Diagnostic], source: Option<&str>) {
    for diag in diagnostics {
        match source {
            Some(src) => emitter.emit_with_source(diag, src),
            None => emitter.emit(diag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tarn_diagnostics::DiagnosticSink;
    use tarn_sema::{SemanticError, UnusedKind};

    const UNUSED_LOCAL: &str = r#"
        func main() {
            var x = 1;
            return 0;
        }
    "#;

    #[test]
    fn test_compile_simple_program() {
        let source = r#"
            import "fmt";
            func add(a, b) { return a + b; }
            func main() { fmt.println(add(10, 32)); return 0; }
        "#;

        let output = compile(source, SeverityPolicy::deny()).unwrap();
        assert!(output.warnings.is_empty());
        assert!(output.object.contains("func add/2"));
        assert!(output.object.contains("call \"fmt\".println/1"));
    }

    #[test]
    fn test_unused_local_warns_under_warn_policy() {
        let output = compile(UNUSED_LOCAL, SeverityPolicy::warn()).unwrap();

        assert_eq!(output.warnings.len(), 1);
        assert!(output.warnings[0].level.is_warning());
        assert_eq!(output.warnings[0].message, "declared and not used: x");
        assert!(output.object.contains("func main/0"));
    }

    #[test]
    fn test_unused_local_fails_under_deny_policy() {
        let err = compile(UNUSED_LOCAL, SeverityPolicy::deny()).unwrap_err();

        let errors = err.semantic_errors();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            SemanticError::Unused(entity)
                if entity.kind == UnusedKind::Variable && entity.name == "x"
        ));

        let mut sink = DiagnosticSink::new();
        err.collect_to_sink(&mut sink, Some("main.tn"));
        assert_eq!(sink.error_count(), 1);
        assert_eq!(sink.warning_count(), 0);
        assert_eq!(sink.diagnostics()[0].file.as_deref(), Some("main.tn"));
    }

    #[test]
    fn test_failure_reports_warnings_alongside_errors() {
        let source = "import \"fmt\"; func main() { return y; }";

        let err = compile(source, SeverityPolicy::warn()).unwrap_err();
        let mut sink = DiagnosticSink::new();
        err.collect_to_sink(&mut sink, None);

        assert_eq!(sink.error_count(), 1);
        assert_eq!(sink.warning_count(), 1);
        // 按源码位置排序：导入在前
        assert!(sink.diagnostics()[0].level.is_warning());
    }

    #[test]
    fn test_syntax_errors_are_classified() {
        assert!(matches!(
            compile("func main() { var x = $; }", SeverityPolicy::warn()),
            Err(CompileError::LexError(_))
        ));
        assert!(matches!(
            compile("func main() { var = 1; }", SeverityPolicy::warn()),
            Err(CompileError::ParseError(_))
        ));
    }

    #[test]
    fn test_check_does_not_need_codegen() {
        let warnings = check("import \"fmt\";", SeverityPolicy::warn()).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message, "\"fmt\" imported and not used");
    }

    #[test]
    fn test_check_files_in_parallel_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();
        for i in 0..8 {
            let path = dir.path().join(format!("f{}.tn", i));
            let mut file = std::fs::File::create(&path).unwrap();
            if i % 2 == 0 {
                writeln!(file, "func main() {{ var unused{} = {}; }}", i, i).unwrap();
            } else {
                writeln!(file, "func main() {{ return {}; }}", i).unwrap();
            }
            paths.push(path);
        }
        paths.push(dir.path().join("missing.tn"));

        let reports = check_files(&paths, SeverityPolicy::deny());
        assert_eq!(reports.len(), 9);
        for (i, report) in reports.iter().enumerate().take(8) {
            assert_eq!(report.path, paths[i]);
            assert_eq!(report.is_ok(), i % 2 == 1, "file {}", i);
        }
        assert!(matches!(reports[8].result, Err(CompileError::IoError(_))));
        assert!(reports[8].source.is_none());

        let relaxed = check_files(&paths[..8], SeverityPolicy::warn());
        assert!(relaxed.iter().all(FileReport::is_ok));
    }
}
