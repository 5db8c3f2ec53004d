use std::collections::HashMap;

use xseq::{
    empty, from_channel, from_iter, from_map, from_map_keys, from_map_values, from_slice,
    from_slice_idx, from_slice_reverse, from_slice_shuffle, limit,
};

#[test]
fn empty_yields_nothing() {
    assert_eq!(empty::<i32>().to_vec(), Vec::<i32>::new());
}

#[test]
fn from_slice_yields_in_order_and_restarts() {
    let seq = from_slice(vec![1, 2, 3]);
    assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    assert_eq!(limit(seq, 2).to_vec(), vec![1, 2]);
}

#[test]
fn from_iter_restarts_from_a_clone() {
    let seq = from_iter(0..4);
    assert_eq!(seq.to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(seq.to_vec(), vec![0, 1, 2, 3]);

    let seq = from_iter(vec!["a", "b"]);
    assert_eq!(seq.to_vec(), vec!["a", "b"]);
}

#[test]
fn from_slice_idx_keys_by_index() {
    let seq = from_slice_idx(vec!["a", "b", "c"]);
    assert_eq!(seq.entries().to_vec(), vec![(0, "a"), (1, "b"), (2, "c")]);
    assert_eq!(seq.keys().to_vec(), vec![0, 1, 2]);
    assert_eq!(seq.values().to_vec(), vec!["a", "b", "c"]);
}

#[test]
fn from_slice_reverse_walks_backwards() {
    assert_eq!(from_slice_reverse(vec![1, 2, 3]).to_vec(), vec![3, 2, 1]);
}

#[test]
fn from_slice_shuffle_permutes_once() {
    let input: Vec<i32> = (0..100).collect();
    let seq = from_slice_shuffle(input.clone());

    let mut first = seq.to_vec();
    // The permutation is fixed at construction: every walk sees the same order.
    assert_eq!(seq.to_vec(), first);

    first.sort();
    assert_eq!(first, input);
}

#[test]
fn map_constructors_cover_all_entries() {
    let mut m = HashMap::new();
    for i in 0..100 {
        m.insert(i, i.to_string());
    }

    let mut keys = from_map_keys(m.clone()).to_vec();
    keys.sort();
    assert_eq!(keys, (0..100).collect::<Vec<_>>());

    let mut values = from_map_values(m.clone()).to_vec();
    values.sort();
    let mut want: Vec<String> = (0..100).map(|i| i.to_string()).collect();
    want.sort();
    assert_eq!(values, want);

    assert_eq!(from_map(m.clone()).to_map(), m);
}

#[test]
fn from_channel_drains_until_closed() {
    let (tx, rx) = crossbeam_channel::unbounded();
    tx.send(1).unwrap();
    tx.send(2).unwrap();
    drop(tx);

    let seq = from_channel(rx);
    assert_eq!(seq.to_vec(), vec![1, 2]);
    // stateful by design: the channel is already drained
    assert_eq!(seq.to_vec(), Vec::<i32>::new());
}

#[test]
fn from_channel_stops_on_consumer_request() {
    let (tx, rx) = crossbeam_channel::unbounded();
    for i in 0..5 {
        tx.send(i).unwrap();
    }
    drop(tx);

    let seq = from_channel(rx);
    assert_eq!(limit(seq.clone(), 2).to_vec(), vec![0, 1]);
    // the remainder is still in the channel for the next invocation
    assert_eq!(seq.to_vec(), vec![2, 3, 4]);
}
