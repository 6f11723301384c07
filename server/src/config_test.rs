use super::*;

#[test]
fn parse_host_defaults_to_unspecified() {
    assert_eq!(parse_host(None), Ok(DEFAULT_HOST));
    assert_eq!(parse_host(Some("  ")), Ok(DEFAULT_HOST));
}

#[test]
fn parse_host_accepts_ipv4_and_ipv6() {
    assert_eq!(parse_host(Some("127.0.0.1")), Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert_eq!(parse_host(Some("::1")), Ok(IpAddr::V6(std::net::Ipv6Addr::LOCALHOST)));
}

#[test]
fn parse_host_rejects_hostname() {
    assert_eq!(parse_host(Some("localhost")), Err(ConfigError::InvalidHost("localhost".into())));
}

#[test]
fn parse_port_defaults_to_3000() {
    assert_eq!(parse_port(None), Ok(3000));
    assert_eq!(parse_port(Some("")), Ok(3000));
}

#[test]
fn parse_port_reads_value() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn socket_addr_combines_host_and_port() {
    let cfg = ServerConfig { host: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 4000 };
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:4000");
}

#[test]
fn config_error_messages() {
    assert_eq!(ConfigError::InvalidPort("x".into()).to_string(), "invalid PORT: x");
    assert_eq!(ConfigError::InvalidHost("y".into()).to_string(), "invalid HOST: y");
}
