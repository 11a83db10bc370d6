//! Stream URL assembly.
//!
//! Builds the `bambu:///tutk` connection URL from a device and its streaming
//! credentials. Key order is fixed; values go into the query string as-is.

use uuid::Uuid;

use crate::error::{ApiError, CoreError};
use crate::types::{CameraCredentials, Device};

/// Network protocol version expected by bambu_source.
pub const NET_VER: &str = "02.03.01.52";

/// Client library version expected by bambu_source.
pub const CLI_VER: &str = "02.03.01.51";

/// Firmware fallback when the device reports no version.
const DEV_VER_FALLBACK: &str = "00.00.00.00";

/// Generate the per-run client instance identifier.
pub fn new_cli_id() -> String {
    Uuid::new_v4().to_string()
}

/// Assemble the full stream URL for a device.
///
/// Fails when any of ttcode/authkey/passwd is empty.
pub fn stream_url(
    creds: &CameraCredentials,
    device: &Device,
    cli_id: &str,
) -> Result<String, CoreError> {
    for (field, value) in [
        ("ttcode", &creds.ttcode),
        ("authkey", &creds.authkey),
        ("passwd", &creds.passwd),
    ] {
        if value.is_empty() {
            return Err(ApiError::IncompleteCredentials {
                dev_id: device.dev_id.clone(),
                missing: field,
            }
            .into());
        }
    }

    let dev_ver = if device.ota_version.is_empty() {
        DEV_VER_FALLBACK
    } else {
        device.ota_version.as_str()
    };

    let params = [
        ("uid", creds.ttcode.as_str()),
        ("authkey", creds.authkey.as_str()),
        ("passwd", creds.passwd.as_str()),
        ("region", creds.region.as_str()),
        ("device", device.dev_id.as_str()),
        ("net_ver", NET_VER),
        ("dev_ver", dev_ver),
        ("refresh_url", "1"),
        ("cli_id", cli_id),
        ("cli_ver", CLI_VER),
    ];

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    Ok(format!("bambu:///tutk?{}", query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, CoreError};

    fn make_device() -> Device {
        Device {
            dev_id: "ABC123".to_string(),
            name: "Printer1".to_string(),
            dev_product_name: "X1 Carbon".to_string(),
            ota_version: "01.02.00.00".to_string(),
            online: true,
        }
    }

    fn make_creds() -> CameraCredentials {
        CameraCredentials {
            ttcode: "U1".to_string(),
            authkey: "K1".to_string(),
            passwd: "P1".to_string(),
            region: "us".to_string(),
        }
    }

    #[test]
    fn test_full_url() {
        let url = stream_url(&make_creds(), &make_device(), "run-id").unwrap();
        assert_eq!(
            url,
            "bambu:///tutk?uid=U1&authkey=K1&passwd=P1&region=us&device=ABC123\
             &net_ver=02.03.01.52&dev_ver=01.02.00.00&refresh_url=1\
             &cli_id=run-id&cli_ver=02.03.01.51"
        );
    }

    #[test]
    fn test_key_order_and_uniqueness() {
        let url = stream_url(&make_creds(), &make_device(), "x").unwrap();

        let query = url.strip_prefix("bambu:///tutk?").unwrap();
        let keys: Vec<&str> = query
            .split('&')
            .map(|pair| pair.split('=').next().unwrap())
            .collect();

        assert_eq!(
            keys,
            vec![
                "uid",
                "authkey",
                "passwd",
                "region",
                "device",
                "net_ver",
                "dev_ver",
                "refresh_url",
                "cli_id",
                "cli_ver"
            ]
        );
    }

    #[test]
    fn test_empty_passwd_is_rejected() {
        let creds = CameraCredentials {
            passwd: String::new(),
            ..make_creds()
        };

        let result = stream_url(&creds, &make_device(), "x");
        assert!(matches!(
            result,
            Err(CoreError::Api(ApiError::IncompleteCredentials {
                missing: "passwd",
                ..
            }))
        ));
    }

    #[test]
    fn test_empty_ttcode_is_rejected() {
        let creds = CameraCredentials {
            ttcode: String::new(),
            ..make_creds()
        };

        assert!(stream_url(&creds, &make_device(), "x").is_err());
    }

    #[test]
    fn test_missing_firmware_falls_back() {
        let device = Device {
            ota_version: String::new(),
            ..make_device()
        };

        let url = stream_url(&make_creds(), &device, "x").unwrap();
        assert!(url.contains("&dev_ver=00.00.00.00&"));
    }

    #[test]
    fn test_cli_id_is_unique_per_call() {
        assert_ne!(new_cli_id(), new_cli_id());
    }
}
