//! Binary checkpoints of trained weights.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::backend::{Backend, Elm};
use crate::engine::network::Network;
use crate::engine::topology::Topology;
use crate::error::{NetworkError, Result};

const MAGIC: &[u8; 4] = b"SGNT";

/// One weight matrix stored row-major with its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerWeights {
    pub rows: usize,
    pub cols: usize,
    pub values: Vec<Elm>,
}

/// Everything needed to rebuild a trained network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Version for compatibility checking
    pub version: u32,
    pub topology: Topology,
    pub learning_rate: Elm,
    /// Weight matrices, input side first
    pub layers: Vec<LayerWeights>,
}

impl Checkpoint {
    /// Current checkpoint version
    pub const VERSION: u32 = 1;

    pub fn from_network<B: Backend>(network: &Network<B>) -> Self {
        let layers = network
            .weights()
            .iter()
            .map(|w| {
                let (rows, cols) = B::shape(w);
                LayerWeights {
                    rows,
                    cols,
                    values: B::to_vec(w),
                }
            })
            .collect();

        Self {
            version: Self::VERSION,
            topology: network.topology().clone(),
            learning_rate: network.learning_rate(),
            layers,
        }
    }

    /// Rebuilds the network, checking every matrix against the topology.
    pub fn into_network<B: Backend>(self) -> Result<Network<B>> {
        // デシリアライズ時には Topology::new の検証を通らないので再検証する
        let topology = Topology::new(
            self.topology.input_nodes(),
            self.topology.hidden_nodes().to_vec(),
            self.topology.output_nodes(),
        )?;
        let weights = self
            .layers
            .into_iter()
            .enumerate()
            .map(|(i, layer)| {
                if layer.rows.checked_mul(layer.cols) != Some(layer.values.len()) {
                    return Err(NetworkError::shape_mismatch(
                        format!("checkpoint layer {}", i),
                        &[layer.rows, layer.cols],
                        &[layer.values.len()],
                    ));
                }
                B::from_vec(layer.values, (layer.rows, layer.cols))
            })
            .collect::<Result<Vec<_>>>()?;

        Network::from_weights(topology, weights, self.learning_rate)
    }

    /// Save checkpoint to binary file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        // マジックバイトの直後にバージョンを置き、本体より先に読めるようにする
        writer.write_all(MAGIC)?;
        writer.write_u32::<LittleEndian>(self.version)?;
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;

        log::info!(
            "Saved checkpoint {:?} to {}",
            self.topology.layer_sizes(),
            path.display()
        );
        Ok(())
    }

    /// Load checkpoint from binary file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(NetworkError::InvalidFormat(
                "invalid magic bytes".to_string(),
            ));
        }

        let version = reader.read_u32::<LittleEndian>()?;
        if version != Self::VERSION {
            return Err(NetworkError::VersionMismatch {
                expected: Self::VERSION,
                found: version,
            });
        }

        let checkpoint: Checkpoint = bincode::deserialize_from(&mut reader)?;
        if checkpoint.version != version {
            return Err(NetworkError::InvalidFormat(format!(
                "header version {} does not match body version {}",
                version, checkpoint.version
            )));
        }

        log::info!(
            "Loaded checkpoint {:?} from {}",
            checkpoint.topology.layer_sizes(),
            path.display()
        );
        Ok(checkpoint)
    }
}
