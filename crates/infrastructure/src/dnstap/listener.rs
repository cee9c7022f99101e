use bytes::Bytes;
use dnsflow_domain::DomainError;
use futures::{SinkExt, StreamExt};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::UnixListener;
use tokio::sync::mpsc;
use tokio_util::codec::Framed;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use super::framestream::{
    ControlFrame, ControlType, Frame, FrameStreamCodec, FrameStreamError, CONTENT_TYPE_DNSTAP,
};

const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Unix socket server accepting dnstap writers.
///
/// Each connection runs on its own task and pushes data frames into the
/// shared bounded queue. A framing error closes that connection only.
pub struct DnstapListener {
    listener: UnixListener,
    path: PathBuf,
    max_frame_length: usize,
}

impl DnstapListener {
    /// Bind `path`, removing a stale socket file left by a previous run.
    pub fn bind(path: impl AsRef<Path>, max_frame_length: usize) -> Result<Self, DomainError> {
        let path = path.as_ref().to_path_buf();

        match std::fs::remove_file(&path) {
            Ok(()) => debug!(path = %path.display(), "Removed stale dnstap socket"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(DomainError::IoError(format!(
                    "Failed to remove stale socket {}: {}",
                    path.display(),
                    e
                )))
            }
        }

        let listener = UnixListener::bind(&path).map_err(|e| {
            DomainError::IoError(format!("Failed to bind {}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), "dnstap listener bound");

        Ok(Self {
            listener,
            path,
            max_frame_length,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Accept writers until `shutdown` fires. Frames go to `frames`.
    pub async fn run(self, frames: mpsc::Sender<Bytes>, shutdown: CancellationToken) {
        let mut connection_id: u64 = 0;

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("dnstap listener: shutting down");
                    break;
                }
                accepted = self.listener.accept() => {
                    let stream = match accepted {
                        Ok((stream, _)) => stream,
                        Err(e) => {
                            warn!(error = %e, "dnstap listener: accept failed");
                            tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                            continue;
                        }
                    };

                    connection_id += 1;
                    let frames = frames.clone();
                    let shutdown = shutdown.clone();
                    let max_frame_length = self.max_frame_length;

                    tokio::spawn(async move {
                        debug!(connection = connection_id, "dnstap writer connected");
                        tokio::select! {
                            _ = shutdown.cancelled() => {}
                            result = serve_connection(stream, frames, max_frame_length) => match result {
                                Ok(forwarded) => debug!(
                                    connection = connection_id,
                                    frames = forwarded,
                                    "dnstap writer disconnected"
                                ),
                                Err(e) => error!(
                                    connection = connection_id,
                                    error = %e,
                                    "dnstap connection closed on framing error"
                                ),
                            }
                        }
                    });
                }
            }
        }

        if let Err(e) = std::fs::remove_file(&self.path) {
            debug!(error = %e, path = %self.path.display(), "Could not remove dnstap socket");
        }
    }
}

/// Drive one Frame Streams session and forward its data frames.
///
/// Handles the bidirectional handshake (READY / ACCEPT / START / STOP /
/// FINISH) as well as writers that open directly with START. Returns the
/// number of frames forwarded. Forwarding stops quietly once the queue's
/// receiver is gone.
pub async fn serve_connection<S>(
    stream: S,
    frames: mpsc::Sender<Bytes>,
    max_frame_length: usize,
) -> Result<u64, FrameStreamError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut framed = Framed::new(stream, FrameStreamCodec::new(max_frame_length));
    let mut bidirectional = false;
    let mut started = false;
    let mut forwarded: u64 = 0;

    while let Some(frame) = framed.next().await {
        match frame? {
            Frame::Control(control) => match control.control_type {
                ControlType::Ready if !started => {
                    if !control.offers(CONTENT_TYPE_DNSTAP) {
                        return Err(FrameStreamError::ContentTypeMismatch);
                    }
                    bidirectional = true;
                    let accept = ControlFrame::new(ControlType::Accept)
                        .with_content_type(CONTENT_TYPE_DNSTAP);
                    framed.send(Frame::Control(accept)).await?;
                }
                ControlType::Start if !started => {
                    if !control.offers(CONTENT_TYPE_DNSTAP) {
                        return Err(FrameStreamError::ContentTypeMismatch);
                    }
                    started = true;
                }
                ControlType::Stop if started => {
                    if bidirectional {
                        framed
                            .send(Frame::Control(ControlFrame::new(ControlType::Finish)))
                            .await?;
                    }
                    return Ok(forwarded);
                }
                other => return Err(FrameStreamError::UnexpectedControl(other)),
            },
            Frame::Data(payload) => {
                if !started {
                    return Err(FrameStreamError::DataBeforeStart);
                }
                if frames.send(payload).await.is_err() {
                    debug!("Frame queue closed, dropping dnstap connection");
                    return Ok(forwarded);
                }
                forwarded += 1;
            }
        }
    }

    Ok(forwarded)
}
