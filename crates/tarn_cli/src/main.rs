use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tarn_diagnostics::Emitter;
use tarn_driver::{emit_diagnostics, CompileOptions, Session, UnusedOverride};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tarnc")]
#[command(about = "Tarn 编译器", version)]
struct Cli {
    /// 日志详细程度 (-v, -vv, -vvv)；RUST_LOG 优先
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// 未使用实体的严重级别；都不给时保留默认（警告）
#[derive(Args, Debug, Default)]
struct UnusedArgs {
    /// 未使用的变量、导入和标签报告为警告
    #[arg(long, conflicts_with = "deny_unused")]
    warn_unused: bool,

    /// 未使用的变量、导入和标签报告为错误
    #[arg(long)]
    deny_unused: bool,
}

impl UnusedArgs {
    fn to_override(&self) -> UnusedOverride {
        if self.deny_unused {
            UnusedOverride::Deny
        } else if self.warn_unused {
            UnusedOverride::Warn
        } else {
            UnusedOverride::Default
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// 编译 Tarn 源文件为目标文件
    Build {
        /// 输入文件
        input: PathBuf,

        /// 输出文件 (默认: a.tobj)
        #[arg(short, long, default_value = "a.tobj")]
        output: PathBuf,

        #[command(flatten)]
        unused: UnusedArgs,
    },

    /// 检查语法和语义错误（多文件并行）
    Check {
        /// 输入文件
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        #[command(flatten)]
        unused: UnusedArgs,
    },

    /// 静态检查工具：默认非严格，未使用实体只报告警告
    Vet {
        /// 输入文件
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// 未使用实体报告为错误
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ok = match cli.command {
        Commands::Build {
            input,
            output,
            unused,
        } => cmd_build(&input, &output, unused.to_override())?,
        Commands::Check { inputs, unused } => cmd_check(&inputs, unused.to_override()),
        Commands::Vet { inputs, strict } => {
            // vet 不写入策略，除非显式要求严格
            let unused = if strict {
                UnusedOverride::Deny
            } else {
                UnusedOverride::Default
            };
            cmd_check(&inputs, unused)
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn emitter() -> Emitter {
    if std::io::stderr().is_terminal() {
        Emitter::new()
    } else {
        Emitter::without_colors()
    }
}

/// 构建命令：只有成功时才写出目标文件
fn cmd_build(input: &Path, output: &Path, unused: UnusedOverride) -> Result<bool> {
    let session = Session::new(&CompileOptions::default().with_unused(unused));
    let file = input.display().to_string();
    let source =
        fs::read_to_string(input).with_context(|| format!("failed to read {}", file))?;

    tracing::info!(input = %file, output = %output.display(), "build started");
    eprintln!("📦 编译 {} ...", file);
    let emitter = emitter();

    match session.compile(&source) {
        Ok(result) => {
            let warnings: Vec<_> = result
                .warnings
                .into_iter()
                .map(|w| w.with_file(file.as_str()))
                .collect();
            emit_diagnostics(&emitter, &warnings, Some(&source));

            fs::write(output, result.object)
                .with_context(|| format!("failed to write {}", output.display()))?;
            eprintln!("✅ 成功生成 {}", output.display());
            Ok(true)
        }
        Err(err) => {
            err.emit(&emitter, Some(&file), Some(&source));
            eprintln!("❌ 编译失败");
            Ok(false)
        }
    }
}

/// 检查命令：并行检查所有输入
fn cmd_check(inputs: &[PathBuf], unused: UnusedOverride) -> bool {
    let session = Session::new(&CompileOptions::default().with_unused(unused));
    let emitter = emitter();
    let mut failed = 0;
    tracing::info!(files = inputs.len(), ?unused, "check started");

    for report in session.check_files(inputs) {
        let file = report.path.display().to_string();
        let source = report.source.as_deref();

        match &report.result {
            Ok(warnings) => {
                let warnings: Vec<_> = warnings
                    .iter()
                    .cloned()
                    .map(|w| w.with_file(file.as_str()))
                    .collect();
                emit_diagnostics(&emitter, &warnings, source);
            }
            Err(err) => {
                failed += 1;
                err.emit(&emitter, Some(&file), source);
            }
        }
    }

    if failed == 0 {
        eprintln!("✅ 无错误");
        true
    } else {
        eprintln!("❌ {} 个文件有错误", failed);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_unused_flags_map_to_override() {
        let cli = Cli::parse_from(["tarnc", "build", "main.tn", "--deny-unused"]);
        match cli.command {
            Commands::Build { unused, .. } => {
                assert_eq!(unused.to_override(), UnusedOverride::Deny)
            }
            _ => panic!("expected build"),
        }

        let cli = Cli::parse_from(["tarnc", "check", "a.tn", "b.tn"]);
        match cli.command {
            Commands::Check { inputs, unused } => {
                assert_eq!(inputs.len(), 2);
                assert_eq!(unused.to_override(), UnusedOverride::Default);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_unused_flags_conflict() {
        let result =
            Cli::try_parse_from(["tarnc", "build", "main.tn", "--warn-unused", "--deny-unused"]);
        assert!(result.is_err());
    }
}
