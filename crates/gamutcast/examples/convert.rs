#![allow(clippy::print_stdout, clippy::print_stderr)]

use gamutcast::error::ColorFormatError;
use gamutcast::Converter;

fn run(text: &str) -> Result<(), ColorFormatError> {
    let converter = Converter::from_environment();
    let conversion = converter.convert(text)?;

    println!(
        "{} (looks like {}, gamut {})",
        conversion.color(),
        conversion.input_notation(),
        converter.detector().detect(conversion.color()).original_space()
    );

    for result in conversion.results() {
        let warnings = result.warnings();
        let mut flags = Vec::new();
        if warnings.used_fallback {
            flags.push("fallback");
        }
        if warnings.out_of_gamut {
            flags.push("out of gamut");
        }

        println!(
            "{:>10}  {:<44} {}  {}",
            result.notation(),
            result.rendered_text(),
            result.preview_hex(),
            flags.join(", ")
        );
    }

    for entry in converter.take_log() {
        eprintln!("{}", entry);
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() {
        "oklch(74.32% 0.2194 51.36)".to_string()
    } else {
        args.join(" ")
    };

    if let Err(err) = run(&text) {
        eprintln!("could not convert {:?}: {}", text, err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn run_default() {
        assert!(super::run("oklch(74.32% 0.2194 51.36)").is_ok());
        assert!(super::run("not-a-color").is_err());
    }
}
