//! # CLI Flows
//!
//! Drives `ep_cli::commands::run` the way the binary does, with output
//! captured in memory.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ep_01_key_material::{keccak256, parse_address};
    use ep_cli::cli::Command;
    use ep_cli::commands::{run, Outcome};
    use ep_cli::config::{CliConfig, OutputFormat};
    use k256::ecdsa::SigningKey;
    use serde_json::Value;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Nothing listens on port 1.
    const UNREACHABLE_RPC: &str = "http://127.0.0.1:1";

    fn offline_config(output: OutputFormat) -> CliConfig {
        CliConfig {
            rpc_url: UNREACHABLE_RPC.to_string(),
            timeout: Duration::from_secs(2),
            output,
            ..CliConfig::default()
        }
    }

    async fn exec(command: Command, config: &CliConfig) -> (anyhow::Result<Outcome>, String) {
        let mut out = Vec::new();
        let result = run(&command, config, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    async fn exec_json(command: Command) -> Value {
        let (result, out) = exec(command, &offline_config(OutputFormat::Json)).await;
        assert_eq!(result.unwrap(), Outcome::Success);
        serde_json::from_str(&out).unwrap()
    }

    fn sign_hex(private_key: &str, message: &[u8]) -> String {
        let key = SigningKey::from_slice(&hex::decode(&private_key[2..]).unwrap()).unwrap();
        let (signature, recid) = key.sign_prehash_recoverable(&keccak256(message)).unwrap();
        let mut bytes = signature.to_bytes().to_vec();
        bytes.push(27 + recid.to_byte());
        format!("0x{}", hex::encode(bytes))
    }

    // =============================================================================
    // OFFLINE COMMANDS
    // =============================================================================

    #[tokio::test]
    async fn test_generate_then_address_then_verify() {
        let generated = exec_json(Command::Generate).await;
        let address = generated["address"].as_str().unwrap().to_string();
        let public_key = generated["public_key"].as_str().unwrap().to_string();
        let private_key = generated["private_key"].as_str().unwrap().to_string();

        // Printed address is checksummed and parses back
        assert!(parse_address(&address).is_ok());
        assert_eq!(private_key.len(), 66);
        assert_eq!(public_key.len(), 132);

        let derived = exec_json(Command::Address {
            public_key: public_key.clone(),
        })
        .await;
        assert_eq!(derived["address"], address.as_str());

        let message = "hello ethereum";
        let verified = exec_json(Command::Verify {
            message: message.to_string(),
            signature: sign_hex(&private_key, message.as_bytes()),
            public_key,
            hex: false,
        })
        .await;
        assert_eq!(verified["valid"], true);
        assert_eq!(verified["recovered_address"], address.as_str());
    }

    #[tokio::test]
    async fn test_verify_mismatch_reports_signer() {
        let signer = exec_json(Command::Generate).await;
        let other = exec_json(Command::Generate).await;

        let message = b"\x19Ethereum Signed Message:\n2hi";
        let command = Command::Verify {
            message: hex::encode(message),
            signature: sign_hex(signer["private_key"].as_str().unwrap(), message),
            public_key: other["public_key"].as_str().unwrap().to_string(),
            hex: true,
        };

        let (result, out) = exec(command, &offline_config(OutputFormat::Text)).await;
        assert_eq!(result.unwrap(), Outcome::Mismatch);
        assert!(out.contains("does NOT match"));
        assert!(out.contains(signer["address"].as_str().unwrap()));
    }

    #[tokio::test]
    async fn test_verify_rejects_short_signature() {
        let generated = exec_json(Command::Generate).await;
        let signature = sign_hex(generated["private_key"].as_str().unwrap(), b"msg");

        let command = Command::Verify {
            message: "msg".into(),
            signature: signature[..signature.len() - 2].to_string(),
            public_key: generated["public_key"].as_str().unwrap().to_string(),
            hex: false,
        };
        let (result, out) = exec(command, &offline_config(OutputFormat::Text)).await;

        let error = format!("{:#}", result.unwrap_err());
        assert!(error.contains("Recovery failed"), "{error}");
        assert!(out.is_empty());
    }

    // =============================================================================
    // NETWORK COMMANDS
    // =============================================================================

    #[tokio::test]
    async fn test_network_commands_fail_against_unreachable_node() {
        let config = offline_config(OutputFormat::Text);
        let address = "0x0000000000000000000000000000000000000000".to_string();

        for command in [
            Command::Block,
            Command::Chain,
            Command::Balance {
                address: address.clone(),
            },
            Command::Contract { address },
        ] {
            let (result, out) = exec(command.clone(), &config).await;
            assert!(result.is_err(), "{command:?} should fail");
            assert!(out.is_empty());
        }
    }

    #[tokio::test]
    async fn test_invalid_address_rejected_before_any_request() {
        let (result, _) = exec(
            Command::Balance {
                address: "0x1234".into(),
            },
            &offline_config(OutputFormat::Text),
        )
        .await;

        let error = format!("{:#}", result.unwrap_err());
        assert!(error.starts_with("Invalid address"), "{error}");
    }
}
