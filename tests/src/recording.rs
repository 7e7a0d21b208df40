use polygen::compiler::{Output, Request};
use polygen::Compiler;

use std::sync::{Arc, Mutex};

/// A compiler that records each request and answers with a fixed output.
#[derive(Debug, Clone)]
pub struct Recording {
    output: Output,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl Recording {
    pub fn new(output: Output) -> Recording {
        Recording {
            output,
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

impl Compiler for Recording {
    fn compile(&self, request: &Request) -> Output {
        self.requests.lock().unwrap().push(request.clone());
        self.output.clone()
    }
}
