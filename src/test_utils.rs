//! Entry graphs of real transactions, rebuilt by hand for tests.

use crate::config::asset::NATIVE_ASSET_ID;
use crate::entry::{Bytes, Entry, Hash, RawTx, TxInput, TxOutput};
use std::collections::HashMap;

pub fn hash(hex_str: &str) -> Hash {
    hex_str.parse().expect("Valid hash hex")
}

pub fn bytes(hex_str: &str) -> Bytes {
    Bytes::from_hex(hex_str).expect("Valid hex")
}

pub const BTM: Hash = Hash(NATIVE_ASSET_ID);

/// Bytom mainnet transfer: one spend, two outputs, 0.2 BTM fee
pub fn bytom_transfer_tx() -> RawTx {
    let input_id = hash("9963265eb601df48501cc240e1480780e9ed6e0c8f18fd7dd57954068c5dfd02");
    let output_ids = vec![
        hash("567b34857614d16292220beaca16ce34b939c75023a49cc43fa432fff51ca0dd"),
        hash("a8069d412e48c2b2994d2816758078cff46b215421706b4bad41f72a32928d92"),
    ];

    let mut entries = HashMap::new();
    entries.insert(
        input_id,
        Entry::Spend {
            spent_output_id: hash(
                "01bb3309666618a1507cb5be845b17dee5eb8028ee7e71b17d74b4dc97085bc8",
            ),
        },
    );
    for id in &output_ids {
        entries.insert(*id, Entry::IntraChainOutput);
    }

    RawTx {
        id: hash("4c97d7412b04d49acc33762fc748cd0780d8b44086c229c1a6d0f2adfaaac2db"),
        version: 1,
        serialized_size: 332,
        time_range: 0,
        inputs: vec![TxInput::Spend {
            asset_id: BTM,
            amount: 41_250_000_000,
            control_program: bytes("001456ac170c7965eeac1cc34928c9f464e3f88c17d8"),
            arguments: vec![
                bytes("b1e99a3590d7db80126b273088937a87ba1e8d2f91021a2fd2c36579f7713926e8c7b46c047a43933b008ff16ecc2eb8ee888b4ca1fe3fdf082824e0b3899b02"),
                bytes("2fb851c6ed665fcd9ebc259da1461a1e284ac3b27f5e86c84164aa5186482226"),
            ],
        }],
        outputs: vec![
            TxOutput {
                asset_id: BTM,
                amount: 41_030_000_000,
                control_program: bytes("0014c3d320e1dc4fe787e9f13c1464e3ea5aae96a58f"),
            },
            TxOutput {
                asset_id: BTM,
                amount: 200_000_000,
                control_program: bytes("0014bb93cdb4eca74b068321eeb84ac5d33686281b65"),
            },
        ],
        input_ids: vec![input_id],
        output_ids,
        entries,
    }
}

/// Vapor mainnet transaction that locks part of its input in a vote output
pub fn vapor_vote_tx() -> RawTx {
    let input_id = hash("645045dc9e8bee31738f1d30f702e6678533e215c9175920b3582db9d8026eeb");
    let control_id = hash("7f78999d9e8c99a0f4ad763da4475c45bd920153a0e02a38b3b9dfdfac4f84a3");
    let vote_id = hash("3b4b503d394a598c88268eba18626d6868dbbf66abd98485573f7f334a3d0124");
    let vote = bytes("9742a39a0bcfb5b7ac8f56f1894fbb694b53ebf58f9a032c36cc22d57a06e49e94ff7199063fb7a78190624fa3530f611404b56fc9af91dcaf4639614512cb64");

    let mut entries = HashMap::new();
    entries.insert(
        input_id,
        Entry::Spend {
            spent_output_id: hash(
                "fcf9d0fae86697cd396d81a60cbd296f74ba337d76240d12f7baf3f1e548f771",
            ),
        },
    );
    entries.insert(control_id, Entry::IntraChainOutput);
    entries.insert(vote_id, Entry::VoteOutput { vote });

    RawTx {
        id: hash("4b08a9a705bc83aa4015f7682d054603e6d335a39cdee27baba23681014ce5dd"),
        version: 1,
        serialized_size: 411,
        time_range: 0,
        inputs: vec![TxInput::Spend {
            asset_id: BTM,
            amount: 120_000_000_000_000_000,
            control_program: bytes("0014973616e27ba7468f3a54820c97ab1b22094bd42d"),
            arguments: vec![
                bytes("d8f36726bf7e69a01afdf05251a2338fb8c2595d881898b5903302d32619185f41c90990e7160593fd4dc416fb38b3845f32277685028e52f01fa98a4d121a07"),
                bytes("fbbb8233f1435c2c0ab26ee4aeb94e534490c65a48e253a5dc64cad835462d29"),
            ],
        }],
        outputs: vec![
            TxOutput {
                asset_id: BTM,
                amount: 119_900_000_000_000_000,
                control_program: bytes("00140bcc5b6e8f2cb3390cf6d45fca37ed8606253601"),
            },
            TxOutput {
                asset_id: BTM,
                amount: 100_000_000_000_000,
                control_program: bytes("00143eb3371ee17bfa7d1e6af07c2e1fc08b3b1177ad"),
            },
        ],
        input_ids: vec![input_id],
        output_ids: vec![control_id, vote_id],
        entries,
    }
}
