use common::error::Error;
use common::numeric_kernel::{add_extend, add_into};
use common::types::BufferRole;

/// Reserves exactly `len` elements, reporting failure instead of aborting.
fn try_reserve(buffer: BufferRole, len: usize) -> Result<Vec<f64>, Error> {
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| Error::Allocation {
        buffer,
        elements: len,
    })?;
    Ok(data)
}

/// Input buffer of the probe, filled with a single value.
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    data: Vec<f64>,
}

impl SourceBuffer {
    /// Allocates `len` elements and sets every one of them to `value`.
    pub fn try_filled(buffer: BufferRole, len: usize, value: f64) -> Result<Self, Error> {
        let mut data = try_reserve(buffer, len)?;
        data.resize(len, value);
        Ok(Self { data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// Output buffer of the probe.
///
/// Storage for `len` elements is reserved up front but left unwritten. The
/// first call to [`sum_from`](Self::sum_from) populates it and later calls
/// overwrite it in place.
#[derive(Debug)]
pub struct DestinationBuffer {
    data: Vec<f64>,
    len: usize,
}

impl DestinationBuffer {
    pub fn try_reserved(len: usize) -> Result<Self, Error> {
        let data = try_reserve(BufferRole::Destination, len)?;
        Ok(Self { data, len })
    }

    /// Target length in elements, populated or not.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_populated(&self) -> bool {
        self.data.len() == self.len
    }

    /// The populated elements; empty until the first `sum_from`.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// One repetition: `self[i] = a[i] + b[i]` for every index.
    ///
    /// # Panics
    /// If either source differs in length from this buffer.
    pub fn sum_from(&mut self, a: &SourceBuffer, b: &SourceBuffer) {
        assert_eq!(a.len(), self.len, "source1/destination length mismatch");

        if self.is_populated() {
            add_into(&mut self.data, a.as_slice(), b.as_slice());
        } else {
            add_extend(&mut self.data, a.as_slice(), b.as_slice());
        }
    }
}

/// The three buffers of one probe run, always of identical length.
///
/// Dropping this value releases all of them.
#[derive(Debug)]
pub struct ProbeBuffers {
    pub(crate) source1: SourceBuffer,
    pub(crate) source2: SourceBuffer,
    pub(crate) destination: DestinationBuffer,
}

impl ProbeBuffers {
    /// Fill value of every `source1` element.
    pub const SOURCE1_VALUE: f64 = 1.0;
    /// Fill value of every `source2` element.
    pub const SOURCE2_VALUE: f64 = 2.0;

    /// Acquires and initializes all three buffers, stopping at the first failure.
    ///
    /// Buffers acquired before a failing one are dropped on the error path.
    pub fn try_new(len: usize) -> Result<Self, Error> {
        let source1 = SourceBuffer::try_filled(BufferRole::Source1, len, Self::SOURCE1_VALUE)?;
        let source2 = SourceBuffer::try_filled(BufferRole::Source2, len, Self::SOURCE2_VALUE)?;
        let destination = DestinationBuffer::try_reserved(len)?;

        Ok(Self {
            source1,
            source2,
            destination,
        })
    }

    pub fn len(&self) -> usize {
        self.destination.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destination.is_empty()
    }

    pub fn source1(&self) -> &SourceBuffer {
        &self.source1
    }

    pub fn source2(&self) -> &SourceBuffer {
        &self.source2
    }

    pub fn destination(&self) -> &DestinationBuffer {
        &self.destination
    }

    /// Runs a single elementwise pass into the destination.
    pub fn repeat_once(&mut self) {
        self.destination.sum_from(&self.source1, &self.source2);
    }
}
