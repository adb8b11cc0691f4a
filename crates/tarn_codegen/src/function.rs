//! 函数体代码生成
//!
//! 每个局部占一个槽位，块作用域结束后名字失效但槽位不复用。

use crate::error::{CodegenError, CodegenResult};
use crate::module::ModuleGenerator;
use std::collections::HashMap;
use tarn_syntax::ast::{BinaryOp, Expr, ExprKind, Function, Literal, Stmt};

/// 循环的跳转目标
struct LoopTargets {
    label: Option<String>,
    continue_to: String,
    break_to: String,
}

pub struct FunctionGenerator<'m> {
    module: &'m ModuleGenerator,
    out: &'m mut String,
    scopes: Vec<HashMap<String, usize>>,
    next_slot: usize,
    next_label: usize,
    loops: Vec<LoopTargets>,
}

impl<'m> FunctionGenerator<'m> {
    pub fn new(module: &'m ModuleGenerator, out: &'m mut String) -> Self {
        Self {
            module,
            out,
            scopes: vec![HashMap::new()],
            next_slot: 0,
            next_label: 0,
            loops: Vec::new(),
        }
    }

    pub fn generate(mut self, func: &Function) -> CodegenResult<()> {
        self.line(format!("func {}/{}", func.name.name, func.params.len()));
        for param in &func.params {
            let slot = self.declare(&param.name);
            self.inst(format!("param ${} ; {}", slot, param.name));
        }

        for stmt in &func.body {
            self.gen_stmt(stmt)?;
        }

        // 没有显式 return 时返回 0
        self.inst("push 0");
        self.inst("ret");
        self.line("end");
        Ok(())
    }

    fn line(&mut self, text: impl AsRef<str>) {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    fn inst(&mut self, text: impl AsRef<str>) {
        self.out.push_str("    ");
        self.line(text);
    }

    fn fresh_label(&mut self, hint: &str) -> String {
        let label = format!("L{}_{}", self.next_label, hint);
        self.next_label += 1;
        label
    }

    fn place_label(&mut self, label: &str) {
        self.line(format!("{}:", label));
    }

    fn declare(&mut self, name: &str) -> usize {
        let slot = self.next_slot;
        self.next_slot += 1;
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), slot);
        }
        slot
    }

    fn slot_of(&self, name: &str) -> CodegenResult<usize> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).copied())
            .ok_or_else(|| CodegenError::UndefinedVariable(name.to_string()))
    }

    fn gen_block(&mut self, stmts: &[Stmt]) -> CodegenResult<()> {
        self.scopes.push(HashMap::new());
        let result = stmts.iter().try_for_each(|stmt| self.gen_stmt(stmt));
        self.scopes.pop();
        result
    }

    fn gen_stmt(&mut self, stmt: &Stmt) -> CodegenResult<()> {
        match stmt {
            Stmt::VarDecl { name, value, .. } => {
                self.gen_expr(value)?;
                let slot = self.declare(&name.name);
                self.inst(format!("store ${} ; {}", slot, name.name));
            }
            Stmt::Assign { target, value, .. } => {
                self.gen_expr(value)?;
                let slot = self.slot_of(&target.name)?;
                self.inst(format!("store ${} ; {}", slot, target.name));
            }
            Stmt::Expression(expr) => {
                self.gen_expr(expr)?;
                self.inst("pop");
            }
            Stmt::Block(stmts) => self.gen_block(stmts)?,
            Stmt::If {
                condition,
                then_block,
                else_block,
                ..
            } => {
                let else_label = self.fresh_label("else");
                let end_label = self.fresh_label("endif");
                self.gen_expr(condition)?;
                self.inst(format!("jz {}", else_label));
                self.gen_block(then_block)?;
                self.inst(format!("jmp {}", end_label));
                self.place_label(&else_label);
                if let Some(else_stmts) = else_block {
                    self.gen_block(else_stmts)?;
                }
                self.place_label(&end_label);
            }
            Stmt::While {
                condition, body, ..
            } => self.gen_while(condition, body, None)?,
            Stmt::Labeled { label, body, .. } => {
                self.place_label(&format!(".{}", label.name));
                match body.as_ref() {
                    Stmt::While {
                        condition, body, ..
                    } => self.gen_while(condition, body, Some(label.name.as_str()))?,
                    other => self.gen_stmt(other)?,
                }
            }
            Stmt::Break { label, .. } => {
                let label = label.as_ref().map(|l| l.name.as_str());
                let jump = format!("jmp {}", self.loop_target(label, "break")?.break_to);
                self.inst(jump);
            }
            Stmt::Continue { label, .. } => {
                let label = label.as_ref().map(|l| l.name.as_str());
                let jump = format!("jmp {}", self.loop_target(label, "continue")?.continue_to);
                self.inst(jump);
            }
            Stmt::Goto { label, .. } => {
                self.inst(format!("jmp .{}", label.name));
            }
            Stmt::Return { value, .. } => {
                match value {
                    Some(value) => self.gen_expr(value)?,
                    None => self.inst("push 0"),
                }
                self.inst("ret");
            }
        }
        Ok(())
    }

    fn gen_while(
        &mut self,
        condition: &Expr,
        body: &[Stmt],
        label: Option<&str>,
    ) -> CodegenResult<()> {
        let cond_label = self.fresh_label("while");
        let end_label = self.fresh_label("endwhile");

        self.place_label(&cond_label);
        self.gen_expr(condition)?;
        self.inst(format!("jz {}", end_label));

        self.loops.push(LoopTargets {
            label: label.map(str::to_string),
            continue_to: cond_label.clone(),
            break_to: end_label.clone(),
        });
        let result = self.gen_block(body);
        self.loops.pop();
        result?;

        self.inst(format!("jmp {}", cond_label));
        self.place_label(&end_label);
        Ok(())
    }

    fn loop_target(&self, label: Option<&str>, keyword: &str) -> CodegenResult<&LoopTargets> {
        let found = match label {
            None => self.loops.last(),
            Some(name) => self
                .loops
                .iter()
                .rev()
                .find(|l| l.label.as_deref() == Some(name)),
        };
        found.ok_or_else(|| CodegenError::MissingJumpTarget(keyword.to_string()))
    }

    fn gen_expr(&mut self, expr: &Expr) -> CodegenResult<()> {
        match &expr.kind {
            ExprKind::Literal(Literal::Int(n)) => self.inst(format!("push {}", n)),
            ExprKind::Literal(Literal::Bool(b)) => self.inst(format!("push {}", b)),
            ExprKind::Literal(Literal::String(s)) => self.inst(format!("push {:?}", s)),
            ExprKind::Variable(name) => {
                let slot = self.slot_of(name)?;
                self.inst(format!("load ${} ; {}", slot, name));
            }
            // 短路求值
            ExprKind::Binary(lhs, op @ (BinaryOp::And | BinaryOp::Or), rhs) => {
                let end_label = self.fresh_label("short");
                self.gen_expr(lhs)?;
                self.inst("dup");
                let jump = if *op == BinaryOp::And { "jz" } else { "jnz" };
                self.inst(format!("{} {}", jump, end_label));
                self.inst("pop");
                self.gen_expr(rhs)?;
                self.place_label(&end_label);
            }
            ExprKind::Binary(lhs, op, rhs) => {
                self.gen_expr(lhs)?;
                self.gen_expr(rhs)?;
                self.inst(op.mnemonic());
            }
            ExprKind::Unary(op, operand) => {
                self.gen_expr(operand)?;
                self.inst(op.mnemonic());
            }
            ExprKind::Call { callee, args } => {
                for arg in args {
                    self.gen_expr(arg)?;
                }
                self.inst(format!("call {}/{}", callee.name, args.len()));
            }
            ExprKind::QualifiedCall {
                package,
                callee,
                args,
            } => {
                let path = self
                    .module
                    .import_path(&package.name)
                    .ok_or_else(|| CodegenError::UndefinedPackage(package.name.clone()))?
                    .to_string();
                for arg in args {
                    self.gen_expr(arg)?;
                }
                self.inst(format!("call \"{}\".{}/{}", path, callee.name, args.len()));
            }
        }
        Ok(())
    }
}
