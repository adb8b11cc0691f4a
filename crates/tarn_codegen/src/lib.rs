//! Tarn Code Generation
//!
//! 把通过语义分析的 AST 降级为文本形式的栈机目标文件
//!
//! - `error.rs` - 错误类型定义
//! - `module.rs` - 模块（导入、函数列表）
//! - `function.rs` - 函数体、语句与表达式

pub mod error;
pub mod function;
pub mod module;

pub use error::{CodegenError, CodegenResult};
pub use module::OBJECT_HEADER;

use module::ModuleGenerator;
use tarn_syntax::ast::Program;

/// 生成目标文件文本
pub fn emit_object(program: &Program) -> CodegenResult<String> {
    ModuleGenerator::new(program).generate(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarn_syntax::parse;

    fn emit(source: &str) -> String {
        let program = parse(source).expect("test source should parse");
        emit_object(&program).expect("codegen should succeed")
    }

    #[test]
    fn test_emit_simple_function() {
        let object = emit("func add(a, b) { return a + b; }");

        assert!(object.starts_with(OBJECT_HEADER));
        assert!(object.contains("func add/2"));
        assert!(object.contains("    param $0 ; a"));
        assert!(object.contains("    load $1 ; b"));
        assert!(object.contains("    add\n    ret"));
        assert!(object.trim_end().ends_with("end"));
    }

    #[test]
    fn test_emit_labeled_loop() {
        let object = emit(
            r#"
            func main() {
                var i = 0;
                outer:
                while (i < 10) {
                    i = i + 1;
                    if (i == 3) { continue outer; }
                    break outer;
                }
            }
            "#,
        );

        assert!(object.contains(".outer:\nL0_while:"));
        assert!(object.contains("    jmp L0_while"));
        assert!(object.contains("    jmp L1_endwhile"));
    }

    #[test]
    fn test_emit_qualified_call_uses_import_path() {
        let object = emit(r#"import "os/path" as p; func main() { p.join("a", "b"); }"#);

        assert!(object.contains("import \"os/path\""));
        assert!(object.contains("    call \"os/path\".join/2\n    pop"));
    }

    #[test]
    fn test_shadowed_locals_get_distinct_slots() {
        let object = emit("func main() { var x = 1; { var x = 2; print(x); } print(x); }");

        assert!(object.contains("store $0 ; x"));
        assert!(object.contains("store $1 ; x"));
        assert!(object.contains("load $1 ; x\n    call print/1"));
        assert!(object.contains("load $0 ; x\n    call print/1"));
    }

    #[test]
    fn test_undefined_variable_is_an_error() {
        let program = parse("func main() { return y; }").unwrap();
        assert!(matches!(
            emit_object(&program),
            Err(CodegenError::UndefinedVariable(ref name)) if name == "y"
        ));
    }
}
