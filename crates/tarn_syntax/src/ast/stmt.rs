use crate::ast::expr::{Expr, Ident, Span};

/// 导入声明: import "os/path" as p;
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub path: String,
    pub alias: Option<Ident>,
    pub span: Span,
}

impl Import {
    /// 导入在文件内绑定的名字：别名，或路径的最后一段
    pub fn name(&self) -> &str {
        match &self.alias {
            Some(alias) => &alias.name,
            None => self.path.rsplit('/').next().unwrap_or(&self.path),
        }
    }
}

/// 函数定义: func add(a, b) { ... }
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: Ident,
    pub params: Vec<Ident>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

// 语句：出现在函数体内部
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    // 变量声明: var x = 1;
    VarDecl { name: Ident, value: Expr, span: Span },

    // 赋值: x = x + 1; (赋值不算"使用")
    Assign { target: Ident, value: Expr, span: Span },

    // 表达式语句: fmt.println("hi");
    Expression(Expr),

    // 块: { ... }
    Block(Vec<Stmt>),

    // if (expr) { ... } else { ... }
    If {
        condition: Expr,
        then_block: Vec<Stmt>,
        else_block: Option<Vec<Stmt>>,
        span: Span,
    },

    // while (expr) { ... }
    While {
        condition: Expr,
        body: Vec<Stmt>,
        span: Span,
    },

    // 带标签的语句: outer: while (...) { ... }
    Labeled {
        label: Ident,
        body: Box<Stmt>,
        span: Span,
    },

    Break { label: Option<Ident>, span: Span },

    Continue { label: Option<Ident>, span: Span },

    Goto { label: Ident, span: Span },

    Return { value: Option<Expr>, span: Span },
}
