use base64::engine::{general_purpose, Engine};
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;
use tracing::debug;

// Type alias for HMAC-SHA256
type HmacSha256 = Hmac<Sha256>;

/// Request signing utilities for the ScheduleHub platform API
pub struct ScheduleHubAuth;

impl ScheduleHubAuth {
    /// Generate a random nonce for API requests
    pub fn generate_nonce() -> String {
        rand::thread_rng().gen_range(10000000..99999999).to_string()
    }

    /// Get current timestamp for API requests
    pub fn get_timestamp() -> i64 {
        Utc::now().timestamp()
    }

    /// Generate the signature the availability API expects on every request
    pub fn generate_signature(
        key_id: &str,
        secret_key: &str,
        method: &str,
        uri: &str,
        timestamp: i64,
        nonce: &str,
        body: &str,
    ) -> String {
        // Header string part in the canonical order the API verifies
        let header_string = format!(
            "X-SH-Key={}&X-SH-Nonce={}&X-SH-Timestamp={}",
            key_id, nonce, timestamp
        );

        // Full string to sign
        let content = format!("{}\n{}\n{}\n{}", method, header_string, uri, body);

        debug!("String to sign: {}", content);

        // Generate HMAC-SHA256
        let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(content.as_bytes());

        // Hex digest, then base64 as the API requires
        let hex_hash = hex::encode(mac.finalize().into_bytes());
        general_purpose::STANDARD.encode(hex_hash.as_bytes())
    }
}
