//! Transport failures surface as connection errors.

use std::time::Duration;

use spofity_lib::SpofityClient;
use spofity_lib::error::CONNECTION_ERROR_MESSAGE;
use spofity_lib::model::Credentials;
use spofity_lib::model::LoginMode;

#[tokio::test]
async fn test_refused_connection_is_connection_error() {
    // port 9 (discard) is closed on any sane test machine
    let client = SpofityClient::builder()
        .url("http://127.0.0.1:9")
        .timeout(Duration::from_secs(5))
        .connect_timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client
        .login(&Credentials::new(LoginMode::Alias, "ana", "secret1"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), CONNECTION_ERROR_MESSAGE);
}
