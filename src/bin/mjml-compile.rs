use mjml_engine::{compile_str, CompilerConfig, MjmlError};
use std::env;
use std::fs;
use std::process;

fn main() {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let config = match take_config_path(&mut args) {
        Ok(Some(path)) => match CompilerConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("✗ {}", e);
                process::exit(1);
            }
        },
        Ok(None) => CompilerConfig::default(),
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };

    if args.is_empty() {
        eprintln!("Usage: mjml-compile [--config config.yaml] <file.mjml>...");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  mjml-compile newsletter.mjml");
        eprintln!("  RUST_LOG=debug mjml-compile --config mjml.yaml *.mjml");
        process::exit(1);
    }

    let mut exit_code = 0;

    for file_path in &args {
        match compile_file(file_path, &config) {
            Ok(()) => {}
            Err(e) => {
                eprintln!("✗ {} failed:", file_path);
                eprintln!("  {}", e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn take_config_path(args: &mut Vec<String>) -> Result<Option<String>, String> {
    let Some(index) = args.iter().position(|a| a == "--config") else {
        return Ok(None);
    };
    if index + 1 >= args.len() {
        return Err("--config expects a file path".to_string());
    }
    let path = args.remove(index + 1);
    args.remove(index);
    Ok(Some(path))
}

fn compile_file(path: &str, config: &CompilerConfig) -> Result<(), MjmlError> {
    let content = fs::read_to_string(path)
        .map_err(|e| MjmlError::IoError(format!("Failed to read {}: {}", path, e)))?;

    let output = compile_str(&content, config)?;

    if output.diagnostics.is_empty() {
        eprintln!("✓ {}", path);
    } else {
        eprintln!("! {} compiled with {} warning(s):", path, output.diagnostics.len());
        for diagnostic in &output.diagnostics {
            eprintln!("    {}", diagnostic);
        }
    }

    println!("{}", output.html);
    Ok(())
}
