//! clap value parsers for arguments that need more than a type check.

use std::fs;
use std::net::Ipv4Addr;
use std::path::PathBuf;

/// Port in 1..=65535
pub fn validate_port(port_str: &str) -> Result<u16, String> {
    let port: u16 = port_str
        .parse()
        .map_err(|_| format!("Port must be a number between 1 and 65535, got: '{}'", port_str))?;

    if port == 0 {
        return Err("Port 0 is not allowed".to_string());
    }

    Ok(port)
}

/// Existing, readable regular file
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.is_file() {
        return Err(format!("Configuration file does not exist or is not a file: '{}'", path_str));
    }

    fs::File::open(&path)
        .map(|_| path)
        .map_err(|e| format!("Cannot read configuration file '{}': {}", path_str, e))
}

/// `localhost`, a dotted IPv4 address, or a plausible hostname
pub fn validate_host_address(host_str: &str) -> Result<String, String> {
    let host = host_str.trim();

    if host.is_empty() {
        return Err("Host address cannot be empty".to_string());
    }
    if host.contains(char::is_whitespace) {
        return Err("Host address cannot contain spaces".to_string());
    }

    let looks_numeric = host.chars().all(|c| c.is_ascii_digit() || c == '.');
    if looks_numeric && host.parse::<Ipv4Addr>().is_err() {
        return Err(format!("Invalid IPv4 address format: '{}'", host_str));
    }

    if host.len() > 253 {
        return Err("Host address is too long (maximum 253 characters)".to_string());
    }

    Ok(host.to_string())
}

/// Calendar date as `YYYY-MM-DD`, kept as text
pub fn validate_date(date_str: &str) -> Result<String, String> {
    let date = date_str.trim();
    date.parse::<jiff::civil::Date>()
        .map(|_| date.to_string())
        .map_err(|e| format!("Expected a YYYY-MM-DD date, got '{}': {}", date_str, e))
}

pub fn validate_limit(limit_str: &str) -> Result<usize, String> {
    match limit_str.parse::<usize>() {
        Ok(0) => Err("Limit must be greater than 0".to_string()),
        Ok(limit) => Ok(limit),
        Err(_) => Err(format!("Limit must be a positive number, got: '{}'", limit_str)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_validation() {
        for port in ["1", "80", "3000", "65535"] {
            assert!(validate_port(port).is_ok(), "Port {} should be valid", port);
        }
        for port in ["0", "65536", "abc", "-1", ""] {
            assert!(validate_port(port).is_err(), "Port {} should be invalid", port);
        }
    }

    #[test]
    fn test_host_validation() {
        for host in [
            "localhost",
            "127.0.0.1",
            "0.0.0.0",
            "10.0.0.1",
            "example.com",
            "my-server.local",
        ] {
            assert!(validate_host_address(host).is_ok(), "Host {} should be valid", host);
        }
        for host in ["", "   ", "host with spaces", "999.999.999.999", "1.2.3", &"x".repeat(300)] {
            assert!(validate_host_address(host).is_err(), "Host '{}' should be invalid", host);
        }
    }

    #[test]
    fn test_config_file_validation() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("bj-info.toml");
        fs::write(&file, "[server]\nport = 4000\n").unwrap();

        assert_eq!(validate_config_file_path(file.to_str().unwrap()).unwrap(), file);
        assert!(validate_config_file_path(dir.path().to_str().unwrap()).is_err());
        assert!(validate_config_file_path("/no/such/bj-info.toml").is_err());
    }

    #[test]
    fn test_date_and_limit() {
        assert_eq!(validate_date(" 2025-09-01 ").unwrap(), "2025-09-01");
        assert!(validate_date("2025-02-30").is_err());
        assert!(validate_date("20250901x").is_err());

        assert_eq!(validate_limit("12"), Ok(12));
        assert!(validate_limit("0").is_err());
        assert!(validate_limit("many").is_err());
    }
}
