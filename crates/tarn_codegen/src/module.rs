//! 模块代码生成

use crate::error::CodegenResult;
use crate::function::FunctionGenerator;
use std::collections::HashMap;
use tarn_syntax::ast::Program;

/// 目标文件头
pub const OBJECT_HEADER: &str = "; tarn object v1";

pub struct ModuleGenerator {
    /// 导入名 -> 导入路径
    imports: HashMap<String, String>,
}

impl ModuleGenerator {
    pub fn new(program: &Program) -> Self {
        let imports = program
            .imports
            .iter()
            .map(|import| (import.name().to_string(), import.path.clone()))
            .collect();
        Self { imports }
    }

    pub fn import_path(&self, name: &str) -> Option<&str> {
        self.imports.get(name).map(String::as_str)
    }

    pub fn generate(&self, program: &Program) -> CodegenResult<String> {
        let mut out = String::new();
        out.push_str(OBJECT_HEADER);
        out.push('\n');

        for import in &program.imports {
            out.push_str(&format!("import {:?}\n", import.path));
        }

        for func in &program.funcs {
            FunctionGenerator::new(self, &mut out).generate(func)?;
        }

        Ok(out)
    }
}
