use crate::domain::edge::EdgeRow;
use anyhow::Result;

/// Edge list source port (implemented by infrastructure adapters).
pub trait EdgeListSource {
    fn load(&self) -> Result<Vec<EdgeRow>>;
}
