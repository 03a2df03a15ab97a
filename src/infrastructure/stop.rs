use tokio::sync::watch;

#[derive(Clone)]
pub struct StopHandle {
    sender: watch::Sender<bool>,
}

#[derive(Clone)]
pub struct StopToken {
    receiver: watch::Receiver<bool>,
}

impl StopHandle {
    pub fn new() -> (Self, StopToken) {
        let (sender, receiver) = watch::channel(false);
        (Self { sender }, StopToken { receiver })
    }

    pub fn trigger(&self) {
        let _ = self.sender.send(true);
    }
}

impl StopToken {
    pub async fn stopped(&mut self) {
        if *self.receiver.borrow() {
            return;
        }
        let _ = self.receiver.changed().await;
    }

    pub fn is_stopped(&self) -> bool {
        *self.receiver.borrow()
    }
}

pub fn install_signal_handlers(handle: StopHandle) {
    let ctrlc = handle.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Получен сигнал завершения (CTRL+C)");
            ctrlc.trigger();
        }
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let term = handle.clone();
        tokio::spawn(async move {
            if let Ok(mut sig) = signal(SignalKind::terminate()) {
                sig.recv().await;
                tracing::info!("Получен сигнал завершения (SIGTERM)");
                term.trigger();
            }
        });
    }
}
