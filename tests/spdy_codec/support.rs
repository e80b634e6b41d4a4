//! Shared in-memory transport for the integration test tree. Both inbound
//! and outbound queues are kept behind cloneable handles so a test can
//! feed more bytes in, or inspect what was written, after handing
//! transport ownership to a `Connection`.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use spdy3_sans_io::transport::Transport;

#[derive(Clone, Default)]
pub struct Inbound(Rc<RefCell<VecDeque<u8>>>);

impl Inbound {
    pub fn push(&self, bytes: &[u8]) {
        self.0.borrow_mut().extend(bytes.iter().copied());
    }
}

#[derive(Clone, Default)]
pub struct Outbound(Rc<RefCell<Vec<u8>>>);

impl Outbound {
    pub fn bytes(&self) -> Vec<u8> {
        self.0.borrow().clone()
    }
}

pub struct MemoryTransport {
    inbound: Inbound,
    outbound: Outbound,
}

impl MemoryTransport {
    pub fn with_inbound(bytes: &[u8]) -> (Self, Inbound, Outbound) {
        let inbound = Inbound::default();
        inbound.push(bytes);
        let outbound = Outbound::default();
        (MemoryTransport { inbound: inbound.clone(), outbound: outbound.clone() }, inbound, outbound)
    }

    pub fn empty() -> (Self, Inbound, Outbound) {
        Self::with_inbound(&[])
    }
}

impl Transport for MemoryTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut inbound = self.inbound.0.borrow_mut();
        let mut n = 0;
        while n < buf.len() {
            match inbound.pop_front() {
                Some(byte) => {
                    buf[n] = byte;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.outbound.0.borrow_mut().extend_from_slice(buf);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}
