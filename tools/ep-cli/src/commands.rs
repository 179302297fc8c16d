//! Command execution and rendering.
//!
//! Offline commands (`generate`, `verify`, `address`) never construct a
//! network client. Results go to the given writer; logs go to stderr.

use std::io::Write;

use anyhow::{Context, Result};
use ep_01_key_material::{
    decode_public_key, encode_private_key, encode_public_key, parse_address, KeyMaterialApi,
    KeyMaterialService,
};
use ep_02_signature_verification::{
    RecoverableSignature, SignatureVerificationApi, SignatureVerificationService,
};
use ep_03_chain_query::{
    AccountKind, Balance, ChainQueryApi, ChainQueryService, JsonRpcClient,
};
use serde_json::json;
use tracing::debug;

use crate::cli::Command;
use crate::config::{CliConfig, OutputFormat};

/// How a successfully executed command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// `verify` ran but the signature does not belong to the claimed key
    Mismatch,
}

/// Execute `command`, writing its result to `out`.
pub async fn run<W: Write>(command: &Command, config: &CliConfig, out: &mut W) -> Result<Outcome> {
    match command {
        Command::Generate => generate(config.output, out).map(|_| Outcome::Success),
        Command::Address { public_key } => {
            address(public_key, config.output, out).map(|_| Outcome::Success)
        }
        Command::Verify {
            message,
            signature,
            public_key,
            hex,
        } => verify(message, *hex, signature, public_key, config, out),
        Command::Balance { .. } | Command::Block | Command::Chain | Command::Contract { .. } => {
            let client = JsonRpcClient::new(config.rpc_url.clone(), config.timeout)
                .context("Failed to create RPC client")?;
            debug!(rpc_url = %config.rpc_url, timeout = ?config.timeout, "Querying node");
            let service = ChainQueryService::new(client);
            query(&service, command, config.output, out).await?;
            Ok(Outcome::Success)
        }
    }
}

// =============================================================================
// NETWORK COMMANDS
// =============================================================================

/// Run a network command against `api`.
pub async fn query<A, W>(api: &A, command: &Command, format: OutputFormat, out: &mut W) -> Result<()>
where
    A: ChainQueryApi + ?Sized,
    W: Write,
{
    match command {
        Command::Balance { address } => {
            let address = parse_address(address).context("Invalid address")?;
            let balance = api.balance(&address).await.context("Failed to get balance")?;
            render_balance(&balance, format, out)
        }
        Command::Block => {
            let number = api
                .latest_block()
                .await
                .context("Failed to get block number")?;
            match format {
                OutputFormat::Text => writeln!(out, "Latest block: {number}")?,
                OutputFormat::Json => write_json(out, &json!({ "block_number": number }))?,
            }
            Ok(())
        }
        Command::Chain => {
            let chain = api.chain().await.context("Failed to get chain ID")?;
            match format {
                OutputFormat::Text => {
                    writeln!(out, "Chain ID: {} ({})", chain.chain_id, chain.network)?
                }
                OutputFormat::Json => write_json(
                    out,
                    &json!({
                        "chain_id": chain.chain_id,
                        "network": chain.network.name(),
                        "known": chain.network.is_known(),
                    }),
                )?,
            }
            Ok(())
        }
        Command::Contract { address } => {
            let address = parse_address(address).context("Invalid address")?;
            let kind = api.classify(&address).await.context("Failed to get code")?;
            match (format, kind) {
                (OutputFormat::Text, AccountKind::Contract { code_size }) => writeln!(
                    out,
                    "{address} is a smart contract ({code_size} bytes of code)"
                )?,
                (OutputFormat::Text, AccountKind::ExternallyOwned) => writeln!(
                    out,
                    "{address} is an externally owned account (EOA)"
                )?,
                (OutputFormat::Json, kind) => {
                    let code_size = match kind {
                        AccountKind::Contract { code_size } => code_size,
                        AccountKind::ExternallyOwned => 0,
                    };
                    write_json(
                        out,
                        &json!({
                            "address": address.to_string(),
                            "is_contract": kind.is_contract(),
                            "code_size": code_size,
                        }),
                    )?
                }
            }
            Ok(())
        }
        other => anyhow::bail!("{other:?} does not query the network"),
    }
}

fn render_balance<W: Write>(balance: &Balance, format: OutputFormat, out: &mut W) -> Result<()> {
    let ether = balance.ether(Balance::DISPLAY_PLACES);
    match format {
        OutputFormat::Text => {
            writeln!(out, "Address: {}", balance.address)?;
            writeln!(out, "Balance: {ether} ETH")?;
            writeln!(out, "Wei:     {}", balance.wei_grouped())?;
        }
        OutputFormat::Json => write_json(
            out,
            &json!({
                "address": balance.address.to_string(),
                "wei": balance.wei.to_string(),
                "ether": ether,
            }),
        )?,
    }
    Ok(())
}

// =============================================================================
// OFFLINE COMMANDS
// =============================================================================

/// Generate a key pair from OS entropy and print it.
pub fn generate<W: Write>(format: OutputFormat, out: &mut W) -> Result<()> {
    let keys = KeyMaterialService::with_os_entropy();
    let (pair, address) = keys
        .generate_key_pair()
        .context("Failed to generate key pair")?;

    let private_key = encode_private_key(pair.private_key());
    let public_key = encode_public_key(pair.public_key());

    match format {
        OutputFormat::Text => {
            writeln!(out, "New account generated")?;
            writeln!(out, "  Address:     {address}")?;
            writeln!(out, "  Public key:  {public_key}")?;
            writeln!(out, "  Private key: {private_key}")?;
            writeln!(out)?;
            writeln!(
                out,
                "WARNING: store the private key securely. Anyone holding it controls the account."
            )?;
        }
        OutputFormat::Json => write_json(
            out,
            &json!({
                "address": address.to_string(),
                "public_key": public_key,
                "private_key": private_key,
            }),
        )?,
    }
    Ok(())
}

/// Derive and print the address of a public key.
pub fn address<W: Write>(public_key: &str, format: OutputFormat, out: &mut W) -> Result<()> {
    let public_key = decode_public_key(public_key).context("Invalid public key")?;
    let address = public_key.address();

    match format {
        OutputFormat::Text => writeln!(out, "Address: {address}")?,
        OutputFormat::Json => write_json(
            out,
            &json!({
                "address": address.to_string(),
                "public_key": encode_public_key(&public_key),
            }),
        )?,
    }
    Ok(())
}

/// Verify a signature and print the verdict.
pub fn verify<W: Write>(
    message: &str,
    message_is_hex: bool,
    signature: &str,
    public_key: &str,
    config: &CliConfig,
    out: &mut W,
) -> Result<Outcome> {
    let message = if message_is_hex {
        decode_hex(message).context("Message is not valid hex")?
    } else {
        message.as_bytes().to_vec()
    };
    let signature = decode_hex(signature).context("Signature is not valid hex")?;

    let verifier = SignatureVerificationService::new(config.verifier);
    let matches = verifier
        .verify_signature(&message, &signature, public_key)
        .context("Signature verification failed")?;

    // Verification succeeded, so the signature parses and recovers
    let signer = RecoverableSignature::from_bytes(&signature)
        .ok()
        .and_then(|parsed| verifier.recover_address(&message, &parsed).ok());

    match config.output {
        OutputFormat::Text if matches => {
            writeln!(out, "Signature valid: signed by the claimed public key")?
        }
        OutputFormat::Text => {
            writeln!(out, "Signature does NOT match the claimed public key")?;
            if let Some(signer) = signer {
                writeln!(out, "Recovered signer: {signer}")?;
            }
        }
        OutputFormat::Json => write_json(
            out,
            &json!({
                "valid": matches,
                "recovered_address": signer.map(|a| a.to_string()),
            }),
        )?,
    }

    Ok(if matches {
        Outcome::Success
    } else {
        Outcome::Mismatch
    })
}

fn decode_hex(input: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits)
}

fn write_json<W: Write>(out: &mut W, value: &serde_json::Value) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
