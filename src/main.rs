extern crate rbtree_collections;
#[macro_use]
extern crate log;
extern crate simplelog;

use log::LevelFilter;
use rbtree_collections::red_black_tree::{RedBlackTree, DEFAULT_CHUNK_SIZE};
use simplelog::{Config, SimpleLogger};
use std::env;
use std::io;
use std::str::FromStr;

const LOG_LEVEL_VAR: &str = "RBTREE_LOG";
const CHUNK_SIZE_VAR: &str = "RBTREE_CHUNK_SIZE";

// Reads a setting from the environment, falling back to `default` when it is unset or invalid.
fn setting<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("Ignoring invalid value {:?} for {}.", raw, name);
                default
            },
        },
        Err(_) => default,
    }
}

fn parse_key(arg: Option<&&str>) -> Option<i32> {
    match arg.map(|raw| raw.parse::<i32>()) {
        Some(Ok(key)) => Some(key),
        _ => {
            println!("Expected an integer key.");
            None
        },
    }
}

fn main() {
    let level = setting(LOG_LEVEL_VAR, LevelFilter::Warn);
    if SimpleLogger::init(level, Config::default()).is_err() {
        eprintln!("Logger was already initialized.");
    }

    let chunk_size = setting(CHUNK_SIZE_VAR, DEFAULT_CHUNK_SIZE);
    let mut tree: RedBlackTree<i32> = RedBlackTree::with_chunk_size(chunk_size);
    info!("Started with arena chunk size {}.", chunk_size);

    let input = io::stdin();

    loop {
        let mut buffer = String::new();
        match input.read_line(&mut buffer) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }
        let args: Vec<&str> = buffer.split_whitespace().collect();
        let command = match args.first() {
            Some(command) => *command,
            None => continue,
        };
        match command {
            "insert" => {
                if args.len() < 2 {
                    println!("Expected at least one key.");
                }
                for raw in &args[1..] {
                    match raw.parse::<i32>() {
                        Ok(key) => match tree.insert(key) {
                            Ok(()) => println!("Inserted {}.", key),
                            Err(error) => println!("Could not insert {}: {}.", key, error),
                        },
                        Err(_) => println!("Skipping {:?}: not an integer key.", raw),
                    }
                }
            },
            "contains" => {
                if let Some(key) = parse_key(args.get(1)) {
                    println!("{}", tree.contains(&key));
                }
            },
            "get" => {
                if let Some(key) = parse_key(args.get(1)) {
                    match tree.get(&key) {
                        Some(key) => println!("{}", key),
                        None => println!("Not found."),
                    }
                }
            },
            "min" => match tree.min() {
                Ok(key) => println!("{}", key),
                Err(error) => println!("{}.", error),
            },
            "max" => match tree.max() {
                Ok(key) => println!("{}", key),
                Err(error) => println!("{}.", error),
            },
            "size" => println!("{}", tree.len()),
            "prefix" => println!("{:?}", tree.to_prefix_string()),
            "infix" => println!("{:?}", tree.to_infix_string()),
            "postfix" => println!("{:?}", tree.to_postfix_string()),
            "list" => println!("{:?}", tree),
            "clear" => tree.clear(),
            "exit" | "quit" => break,
            _ => println!("Unknown command {:?}.", command),
        }
    }
}
