//! 测试用的记录型连接获取器

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use product_ingest::infrastructure::{Connector, DatabaseError, StatementConnection};

/// 注入的故障点
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Fault {
    #[default]
    None,
    Connect,
    Execute,
}

#[derive(Debug, Default)]
struct Journal {
    connects: usize,
    closes: usize,
    statements: Vec<String>,
}

/// 记录每一次连接与执行的语句，不接触真实数据库
#[derive(Clone, Default)]
pub struct RecordingConnector {
    journal: Arc<Mutex<Journal>>,
    fault: Fault,
}

impl RecordingConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(fault: Fault) -> Self {
        Self {
            fault,
            ..Self::default()
        }
    }

    pub fn connects(&self) -> usize {
        self.journal.lock().unwrap().connects
    }

    pub fn closes(&self) -> usize {
        self.journal.lock().unwrap().closes
    }

    pub fn statements(&self) -> Vec<String> {
        self.journal.lock().unwrap().statements.clone()
    }
}

pub struct RecordingConnection {
    journal: Arc<Mutex<Journal>>,
    fault: Fault,
}

impl Connector for RecordingConnector {
    type Connection = RecordingConnection;

    async fn connect(&self) -> Result<Self::Connection, DatabaseError> {
        self.journal.lock().unwrap().connects += 1;
        if self.fault == Fault::Connect {
            return Err(sqlx::Error::Protocol("connection refused".to_string()));
        }
        Ok(RecordingConnection {
            journal: Arc::clone(&self.journal),
            fault: self.fault,
        })
    }
}

impl StatementConnection for RecordingConnection {
    async fn execute_update(&mut self, sql: &str) -> Result<u64, DatabaseError> {
        if self.fault == Fault::Execute {
            return Err(sqlx::Error::Protocol("statement failed".to_string()));
        }
        self.journal.lock().unwrap().statements.push(sql.to_string());
        Ok(1)
    }

    async fn close(self) -> Result<(), DatabaseError> {
        self.journal.lock().unwrap().closes += 1;
        Ok(())
    }
}
