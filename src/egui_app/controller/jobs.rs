use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
        mpsc::{self, Receiver, Sender, TryRecvError},
    },
    thread,
};

use crate::backend::{
    DatasetBackend, DetailsRequest, DetailsResponse, GenerateRequest, HealthSnapshot,
};
use crate::workflow::{self, GeneratedFiles, SavedDownload, UploadOutcome, WorkflowError};

pub(crate) enum JobMessage {
    Uploaded(Result<UploadOutcome, WorkflowError>),
    DetailsSet(Result<DetailsResponse, WorkflowError>),
    FilesGenerated(Result<GeneratedFiles, WorkflowError>),
    Downloaded {
        filename: String,
        result: Result<SavedDownload, WorkflowError>,
    },
    /// `seq` orders refreshes by when they were requested.
    HealthRefreshed {
        seq: u64,
        result: Result<HealthSnapshot, WorkflowError>,
    },
}

/// Worker threads and the channel they report back on.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    active: Arc<AtomicUsize>,
    unapplied: Arc<AtomicUsize>,
    last_health_seq: u64,
}

/// Sends results back, counting each one until the UI thread receives it.
struct JobSender {
    tx: Sender<JobMessage>,
    unapplied: Arc<AtomicUsize>,
}

impl JobSender {
    fn send(&self, message: JobMessage) {
        self.unapplied.fetch_add(1, Ordering::SeqCst);
        if self.tx.send(message).is_err() {
            self.unapplied.fetch_sub(1, Ordering::SeqCst);
        }
    }

    fn send_health(&self, backend: &dyn DatasetBackend, seq: u64) {
        let result = workflow::refresh_health(backend);
        self.send(JobMessage::HealthRefreshed { seq, result });
    }
}

/// Decrements the active worker count when the thread finishes, even on panic.
struct ActiveWorker(Arc<AtomicUsize>);

impl Drop for ActiveWorker {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl ControllerJobs {
    pub(crate) fn new() -> Self {
        let (message_tx, message_rx) = mpsc::channel();
        Self {
            message_tx,
            message_rx,
            active: Arc::new(AtomicUsize::new(0)),
            unapplied: Arc::new(AtomicUsize::new(0)),
            last_health_seq: 0,
        }
    }

    pub(crate) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        let message = self.message_rx.try_recv()?;
        self.unapplied.fetch_sub(1, Ordering::SeqCst);
        Ok(message)
    }

    /// True while any worker is running.
    pub(crate) fn has_active_workers(&self) -> bool {
        self.active.load(Ordering::SeqCst) > 0
    }

    /// True while a worker runs or a sent result has not been received yet.
    ///
    /// Workers count a message before sending it and only then exit, so the
    /// worker count is read first.
    pub(crate) fn has_pending_messages(&self) -> bool {
        self.has_active_workers() || self.unapplied.load(Ordering::SeqCst) > 0
    }

    /// Upload, then refresh health only if the upload succeeded.
    pub(crate) fn begin_upload(&mut self, backend: Arc<dyn DatasetBackend>, path: PathBuf) {
        let seq = self.next_health_seq();
        self.spawn(move |tx| {
            let result = workflow::upload(backend.as_ref(), &path);
            let succeeded = result.is_ok();
            tx.send(JobMessage::Uploaded(result));
            if succeeded {
                tx.send_health(backend.as_ref(), seq);
            }
        });
    }

    /// Set details, then refresh health whatever the outcome.
    pub(crate) fn begin_set_details(
        &mut self,
        backend: Arc<dyn DatasetBackend>,
        request: DetailsRequest,
    ) {
        let seq = self.next_health_seq();
        self.spawn(move |tx| {
            let result = workflow::set_details(backend.as_ref(), &request);
            tx.send(JobMessage::DetailsSet(result));
            tx.send_health(backend.as_ref(), seq);
        });
    }

    /// Generate, then refresh health whatever the outcome.
    pub(crate) fn begin_generate(
        &mut self,
        backend: Arc<dyn DatasetBackend>,
        request: GenerateRequest,
    ) {
        let seq = self.next_health_seq();
        self.spawn(move |tx| {
            let result = workflow::generate(backend.as_ref(), &request);
            tx.send(JobMessage::FilesGenerated(result));
            tx.send_health(backend.as_ref(), seq);
        });
    }

    pub(crate) fn begin_download(
        &self,
        backend: Arc<dyn DatasetBackend>,
        filename: String,
        directory: PathBuf,
    ) {
        self.spawn(move |tx| {
            let result = workflow::download_to_dir(backend.as_ref(), &filename, &directory);
            tx.send(JobMessage::Downloaded { filename, result });
        });
    }

    pub(crate) fn begin_health_refresh(&mut self, backend: Arc<dyn DatasetBackend>) {
        let seq = self.next_health_seq();
        self.spawn(move |tx| tx.send_health(backend.as_ref(), seq));
    }

    fn next_health_seq(&mut self) -> u64 {
        self.last_health_seq += 1;
        self.last_health_seq
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce(JobSender) + Send + 'static,
    {
        let tx = JobSender {
            tx: self.message_tx.clone(),
            unapplied: Arc::clone(&self.unapplied),
        };
        self.active.fetch_add(1, Ordering::SeqCst);
        let worker = ActiveWorker(Arc::clone(&self.active));
        thread::spawn(move || {
            let _worker = worker;
            job(tx);
        });
    }
}
