pub const PORT: u16 = 8080;
pub const PORT_VAR: &str = "PORT";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
