use gradebook::gradebook_auth::{TokenError, TokenIdentity, TokenIssuer};
use gradebook::gradebook_config::JwtConfig;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

fn identity() -> TokenIdentity {
    TokenIdentity {
        id: 42,
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
    }
}

#[test]
fn test_issue_and_verify_round_trip() {
    let issuer = TokenIssuer::new(&get_test_jwt_config());
    let token = issuer.issue(&identity()).unwrap();

    let claims = issuer.verify(&token).unwrap();
    assert_eq!(claims.id, 42);
    assert_eq!(claims.name, "Ada Lovelace");
    assert_eq!(claims.email, "ada@example.com");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_token_is_three_segments() {
    let token = TokenIssuer::new(&get_test_jwt_config())
        .issue(&identity())
        .unwrap();
    assert_eq!(token.split('.').count(), 3);
}

#[test]
fn test_configured_expiry_is_honoured() {
    let mut config = get_test_jwt_config();
    config.access_token_expiry = 60;
    let issuer = TokenIssuer::new(&config);

    let claims = issuer.verify(&issuer.issue(&identity()).unwrap()).unwrap();
    assert_eq!(claims.exp - claims.iat, 60);
}

#[test]
fn test_verify_rejects_other_secret() {
    let token = TokenIssuer::new(&get_test_jwt_config())
        .issue(&identity())
        .unwrap();

    let mut other = get_test_jwt_config();
    other.secret = "another_secret".to_string();

    assert!(matches!(
        TokenIssuer::new(&other).verify(&token),
        Err(TokenError::Invalid)
    ));
}

#[test]
fn test_verify_rejects_empty_token() {
    let issuer = TokenIssuer::new(&get_test_jwt_config());
    assert!(matches!(issuer.verify(""), Err(TokenError::Invalid)));
}

#[test]
fn test_expired_token_reports_expiry() {
    let issuer = TokenIssuer::new(&get_test_jwt_config());
    let issued_at = chrono::Utc::now().timestamp() - 3601;
    let token = issuer.issue_at(&identity(), issued_at).unwrap();

    assert!(matches!(issuer.verify(&token), Err(TokenError::Expired)));
}
