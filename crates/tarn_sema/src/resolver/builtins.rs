use super::Resolver;
use crate::symbol::FunctionSymbol;

/// 注册内建函数
pub fn register_builtins(resolver: &mut Resolver) {
    for (name, arity) in [("print", None), ("exit", Some(1))] {
        resolver
            .functions
            .insert(name.to_string(), FunctionSymbol::builtin(name, arity));
    }
}
