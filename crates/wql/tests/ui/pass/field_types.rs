use std::{collections::VecDeque, rc::Rc, sync::Arc};
use wql::{core::traits::Destination, prelude::*};

#[derive(Default, Record)]
pub struct Everything {
    pub a: i8,
    pub b: i16,
    pub c: i32,
    pub d: i64,
    pub e: i128,
    pub f: isize,
    pub g: u8,
    pub h: u16,
    pub i: u32,
    pub j: u64,
    pub k: u128,
    pub l: usize,
    pub m: bool,
    pub n: String,
    pub o: Timestamp,
    pub p: Option<u32>,
    pub q: Option<Timestamp>,
    pub r: f64,
    pub s: Vec<String>,
    t: char,
}

fn accepts<D: Destination>() {}

fn main() {
    accepts::<Vec<Everything>>();
    accepts::<Vec<Box<Everything>>>();
    accepts::<VecDeque<Rc<Everything>>>();
    accepts::<Vec<Arc<Everything>>>();
    let _ = Everything::default().t;
}
