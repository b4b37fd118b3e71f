use anyhow::Result;
use bl_driver::{
    check_source, load_source, parse_source, parse_statement_source, tokenize_source,
    CompileError, Emitter,
};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blc")]
#[command(about = "BL 解析器 - 解析、检查并格式化 BL 程序", version)]
struct Cli {
    /// 关闭彩色输出
    #[arg(long, global = true)]
    no_color: bool,

    /// 输出日志 (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 解析 BL 源文件并格式化输出
    Parse {
        /// 输入文件 (缺省时从标准输入读取文件名)
        input: Option<String>,

        /// 输入是单条语句而不是完整程序
        #[arg(short, long)]
        statement: bool,
    },

    /// 检查语法错误
    Check {
        /// 输入文件
        input: String,
    },

    /// 列出词法单元
    Tokens {
        /// 输入文件
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let emitter = if cli.no_color {
        colored::control::set_override(false);
        Emitter::without_colors()
    } else {
        Emitter::new()
    };

    match cli.command {
        Commands::Parse { input, statement } => cmd_parse(input, statement, &emitter)?,
        Commands::Check { input } => cmd_check(&input, &emitter),
        Commands::Tokens { input } => cmd_tokens(&input, &emitter),
    }

    Ok(())
}

/// 初始化日志，RUST_LOG 优先于 -v
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// 输出错误并以状态码 1 退出
fn fail(err: &CompileError, input: &str, source: Option<&str>, emitter: &Emitter) -> ! {
    err.emit(emitter, Some(input), source);
    std::process::exit(1);
}

/// 读取源文件，失败时直接退出
fn read_or_exit(input: &str, emitter: &Emitter) -> String {
    match load_source(input) {
        Ok(source) => source,
        Err(e) => fail(&e, input, None, emitter),
    }
}

/// 交互式读取文件名
fn prompt_file_name(statement: bool) -> Result<String> {
    let what = if statement { "statement(s)" } else { "program" };
    print!("Enter valid BL {} file name: ", what);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// 解析命令
fn cmd_parse(input: Option<String>, statement: bool, emitter: &Emitter) -> Result<()> {
    let input = match input {
        Some(input) => input,
        None => prompt_file_name(statement)?,
    };

    println!("📖 解析 {} ...", input);
    let source = read_or_exit(&input, emitter);

    let printed = if statement {
        parse_statement_source(&source).map(|s| s.to_string())
    } else {
        parse_source(&source).map(|p| p.to_string())
    };

    match printed {
        Ok(text) => {
            println!("{}", "✅ 格式化输出:".green());
            print!("{}", text);
            Ok(())
        }
        Err(e) => fail(&e, &input, Some(&source), emitter),
    }
}

/// 检查命令
fn cmd_check(input: &str, emitter: &Emitter) {
    println!("🔍 检查 {} ...", input);
    let source = read_or_exit(input, emitter);

    match check_source(&source) {
        Ok(summary) => {
            println!(
                "{} 程序 '{}': {} 条指令, {} 条语句",
                "✅ 无错误".green(),
                summary.name,
                summary.instructions,
                summary.statements
            );
        }
        Err(e) => {
            eprintln!("{}", "❌ 发现错误:".red());
            fail(&e, input, Some(&source), emitter)
        }
    }
}

/// 词法单元命令
fn cmd_tokens(input: &str, emitter: &Emitter) {
    let source = read_or_exit(input, emitter);

    match tokenize_source(&source) {
        Ok(tokens) => {
            for token in tokens.iter() {
                println!(
                    "{:>6}..{:<6} {}",
                    token.span.start, token.span.end, token.lexeme
                );
            }
        }
        Err(e) => fail(&e, input, Some(&source), emitter),
    }
}
