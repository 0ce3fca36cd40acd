//! Saving a record to disk in both layouts and loading it back.
//!
//! Run with: cargo run --example record
//!
//! Set `RUST_LOG=shape_json=trace` to see the encoder and decoder events.

use shape_json::{from_reader, to_string, to_writer_with_options, JsonOptions, Node};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    int_val: i32,
    float_val: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Record {
    int_val: i32,
    int_arr: [i32; 3],
    struct_val: Sample,
    struct_arr: [Sample; 2],
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

impl Sample {
    fn encode(&self) -> Node {
        let mut node = Node::new();
        node.add_property("_intVal", self.int_val.to_string())
            .add_property("_floatVal", format!("{:.6}", self.float_val));
        node
    }

    fn decode(node: &Node) -> Result<Self, Box<dyn Error>> {
        Ok(Sample {
            int_val: text(node, "_intVal")?.parse()?,
            float_val: text(node, "_floatVal")?.parse()?,
        })
    }
}

impl Record {
    fn encode(&self) -> Node {
        let ints: Vec<String> = self.int_arr.iter().map(i32::to_string).collect();

        let mut node = Node::new();
        node.add_property("_intVal", self.int_val.to_string())
            .add_property("_intArr", ints)
            .add_property("_structVal", self.struct_val.encode())
            .add_property(
                "_structArr",
                self.struct_arr.iter().map(Sample::encode).collect::<Vec<_>>(),
            );
        node
    }

    fn decode(node: &Node) -> Result<Self, Box<dyn Error>> {
        let mut int_arr = [0; 3];
        let values = property(node, "_intArr")?;
        for (slot, value) in int_arr.iter_mut().zip(values) {
            *slot = value.label().ok_or("empty _intArr")?.parse()?;
        }

        let elements = property(node, "_structArr")?;
        let mut struct_arr = [Sample {
            int_val: 0,
            float_val: 0.0,
        }; 2];
        for (slot, element) in struct_arr.iter_mut().zip(elements) {
            *slot = Sample::decode(element)?;
        }

        Ok(Record {
            int_val: text(node, "_intVal")?.parse()?,
            int_arr,
            struct_val: Sample::decode(property(node, "_structVal")?)?,
            struct_arr,
        })
    }
}

fn property<'a>(node: &'a Node, key: &str) -> Result<&'a Node, Box<dyn Error>> {
    node.property(key)
        .ok_or_else(|| format!("missing property {}", key).into())
}

fn text<'a>(node: &'a Node, key: &str) -> Result<&'a str, Box<dyn Error>> {
    property(node, key)?
        .text()
        .ok_or_else(|| format!("property {} has no text", key).into())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let record = Record {
        int_val: 1,
        int_arr: [2, 3, 4],
        struct_val: Sample {
            int_val: 5,
            float_val: 6.0,
        },
        struct_arr: [
            Sample {
                int_val: 7,
                float_val: 8.0,
            },
            Sample {
                int_val: 9,
                float_val: 10.0,
            },
        ],
    };

    let dir = tempfile::tempdir()?;
    for (name, options) in [
        ("readable.json", JsonOptions::pretty()),
        ("compact.json", JsonOptions::new()),
    ] {
        let path = dir.path().join(name);
        to_writer_with_options(BufWriter::new(File::create(&path)?), &record.encode(), options)?;
        println!("{}:\n{}", name, std::fs::read_to_string(&path)?);

        let loaded = from_reader(BufReader::new(File::open(&path)?))?;
        assert_eq!(Record::decode(&loaded)?, record);
        println!("✓ Round-trip successful");
    }

    let mut array = Node::new();
    array.add_property("", vec!["8", "9", "10"]);
    print!("array:\n{}", to_string(&array)?);

    Ok(())
}
