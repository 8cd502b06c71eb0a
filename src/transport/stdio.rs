// ABOUTME: Newline-delimited JSON-RPC transport over stdin/stdout
// ABOUTME: Reads one line at a time, writes one response line per request, stops on EOF or Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use crate::errors::{AppError, AppResult};
use crate::jsonrpc::{error_codes, JsonRpcResponse};

use super::handler::RequestHandler;

/// Stdio transport around a request handler
pub struct StdioTransport {
    handler: RequestHandler,
}

impl StdioTransport {
    /// Create a transport
    #[must_use]
    pub const fn new(handler: RequestHandler) -> Self {
        Self { handler }
    }

    /// Serve stdin/stdout until EOF or Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an error if reading stdin or writing stdout fails
    pub async fn run(&mut self) -> AppResult<()> {
        info!("stdio transport ready - listening on stdin/stdout");

        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();

        tokio::select! {
            result = self.serve(stdin, stdout) => result,
            _ = tokio::signal::ctrl_c() => {
                info!("received Ctrl-C, shutting down");
                Ok(())
            }
        }
    }

    /// Serve any line reader and writer until the reader reaches EOF
    ///
    /// A line that is not valid UTF-8 gets a parse error response and the loop
    /// keeps reading.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails
    pub async fn serve<R, W>(&mut self, mut reader: R, mut writer: W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer).await.map_err(io_error)? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&buffer) {
                Ok(line) => self.handler.handle_line(line.trim_end_matches(['\n', '\r'])),
                Err(e) => {
                    warn!("Discarding non UTF-8 input line: {}", e);
                    Some(JsonRpcResponse::error(
                        None,
                        error_codes::PARSE_ERROR,
                        "Parse error",
                    ))
                }
            };
            let Some(response) = response else {
                continue;
            };

            match serde_json::to_string(&response) {
                Ok(mut json) => {
                    json.push('\n');
                    writer.write_all(json.as_bytes()).await.map_err(io_error)?;
                    writer.flush().await.map_err(io_error)?;
                }
                Err(e) => warn!("Failed to serialize response: {}", e),
            }
        }

        info!("stdin closed, stopping transport");
        Ok(())
    }
}

fn io_error(error: std::io::Error) -> AppError {
    AppError::internal(format!("stdio transport I/O failed: {error}")).with_source(error)
}
