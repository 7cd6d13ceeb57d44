pub mod commands;
pub mod lex_source;
