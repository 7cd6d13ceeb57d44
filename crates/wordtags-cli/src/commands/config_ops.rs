use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn config_export() {
    print!("{}", wordtags_core::config::default_toml());
}

pub fn config_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let config = die!(wordtags_core::config::parse_config_toml(&content), "Error: {}");
    println!(
        "OK: suffix_lens={:?}, ignore_tags={}",
        config.suffix_lens,
        config.ignore_tags.len()
    );
}
