//! Golden annotations of real Bytom and Vapor transactions.

use crate::profile::{Chain, ChainProfile, FieldNaming, Network};
use crate::test_utils::{bytom_transfer_tx, vapor_vote_tx};
use crate::tx_decoder::{annotate, decode_raw_tx};
use serde_json::{json, Value};

fn annotate_json(tx: &crate::entry::RawTx, profile: &ChainProfile) -> Value {
    let annotated = annotate(tx, profile).expect("Golden transaction annotates");
    serde_json::from_slice(&annotated.to_json().expect("Serializable")).expect("Valid JSON")
}

#[test]
fn test_bytom_transfer_golden() {
    let profile = ChainProfile::new(Chain::Bytom, Network::Mainnet);
    let value = annotate_json(&bytom_transfer_tx(), &profile);

    let expected = json!({
        "hash": "4c97d7412b04d49acc33762fc748cd0780d8b44086c229c1a6d0f2adfaaac2db",
        "version": 1,
        "size": 332,
        "time_range": 0,
        "inputs": [{
            "type": "spend",
            "input_id": "9963265eb601df48501cc240e1480780e9ed6e0c8f18fd7dd57954068c5dfd02",
            "asset": "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            "amount": 41_250_000_000u64,
            "script": "001456ac170c7965eeac1cc34928c9f464e3f88c17d8",
            "address": "bm1q26kpwrrevhh2c8xrfy5vnaryu0ugc97c3j896t",
            "spent_output_id": "01bb3309666618a1507cb5be845b17dee5eb8028ee7e71b17d74b4dc97085bc8",
            "arguments": [
                "b1e99a3590d7db80126b273088937a87ba1e8d2f91021a2fd2c36579f7713926e8c7b46c047a43933b008ff16ecc2eb8ee888b4ca1fe3fdf082824e0b3899b02",
                "2fb851c6ed665fcd9ebc259da1461a1e284ac3b27f5e86c84164aa5186482226"
            ],
            "sign_data": "8d2bb534c819464472a94b41cea788e97a2c9dae09a6cb3b7024a44ce5a27835"
        }],
        "outputs": [
            {
                "type": "control",
                "utxo_id": "567b34857614d16292220beaca16ce34b939c75023a49cc43fa432fff51ca0dd",
                "position": 0,
                "asset": "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
                "amount": 41_030_000_000u64,
                "script": "0014c3d320e1dc4fe787e9f13c1464e3ea5aae96a58f",
                "address": "bm1qc0fjpcwuflnc06038s2xfcl2t2hfdfv07hgf77"
            },
            {
                "type": "control",
                "utxo_id": "a8069d412e48c2b2994d2816758078cff46b215421706b4bad41f72a32928d92",
                "position": 1,
                "asset": "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
                "amount": 200_000_000u64,
                "script": "0014bb93cdb4eca74b068321eeb84ac5d33686281b65",
                "address": "bm1qhwfumd8v5a9sdqepa6uy43wnx6rzsxm9cp6j43"
            }
        ],
        "fee": 20_000_000
    });
    assert_eq!(value, expected);
}

#[test]
fn test_vapor_vote_golden_descriptive() {
    let profile =
        ChainProfile::new(Chain::Vapor, Network::Mainnet).with_naming(FieldNaming::DESCRIPTIVE);
    let value = annotate_json(&vapor_vote_tx(), &profile);

    assert_eq!(
        value["tx_id"],
        "4b08a9a705bc83aa4015f7682d054603e6d335a39cdee27baba23681014ce5dd"
    );
    assert_eq!(value["size"], 411);
    assert_eq!(value["fee"], 0);

    let input = &value["inputs"][0];
    assert_eq!(input["type"], "spend");
    assert_eq!(input["amount"], 120_000_000_000_000_000u64);
    assert_eq!(input["address"], "vp1qjumpdcnm5arg7wj5sgxf02cmygy5h4pde4aynj");
    assert_eq!(
        input["spent_output_id"],
        "fcf9d0fae86697cd396d81a60cbd296f74ba337d76240d12f7baf3f1e548f771"
    );
    assert_eq!(
        input["sign_data"],
        "ddd8e2eb9290b4ff95777a823c3193655e16314b37037145369768dc000fe9b8"
    );
    assert_eq!(input["witness_arguments"].as_array().map(Vec::len), Some(2));

    let outputs = value["outputs"].as_array().expect("Outputs array");
    assert_eq!(
        outputs[0],
        json!({
            "type": "control",
            "output_id": "7f78999d9e8c99a0f4ad763da4475c45bd920153a0e02a38b3b9dfdfac4f84a3",
            "position": 0,
            "asset_id": "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            "amount": 119_900_000_000_000_000u64,
            "control_program": "00140bcc5b6e8f2cb3390cf6d45fca37ed8606253601",
            "address": "vp1qp0x9km509jenjr8k630u5dldscrz2dsp8vafzs"
        })
    );
    assert_eq!(
        outputs[1],
        json!({
            "type": "vote",
            "output_id": "3b4b503d394a598c88268eba18626d6868dbbf66abd98485573f7f334a3d0124",
            "position": 1,
            "asset_id": "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            "amount": 100_000_000_000_000u64,
            "control_program": "00143eb3371ee17bfa7d1e6af07c2e1fc08b3b1177ad",
            "address": "vp1q86enw8hp00a868n27p7zu87q3va3zaady6805f",
            "vote": "9742a39a0bcfb5b7ac8f56f1894fbb694b53ebf58f9a032c36cc22d57a06e49e94ff7199063fb7a78190624fa3530f611404b56fc9af91dcaf4639614512cb64"
        })
    );
}

#[test]
fn test_fee_matches_native_amount_difference() {
    for (chain, raw) in [
        (Chain::Bytom, bytom_transfer_tx()),
        (Chain::Vapor, vapor_vote_tx()),
    ] {
        let profile = ChainProfile::new(chain, Network::Mainnet);
        let tx = annotate(&raw, &profile).expect("Golden transaction annotates");

        let inputs: u64 = tx.inputs.iter().filter_map(|input| input.amount).sum();
        let outputs: u64 = tx.outputs.iter().map(|output| output.amount).sum();
        assert_eq!(tx.fee, (inputs - outputs) as i64, "{} fee", chain);
    }
}

#[test]
fn test_every_record_is_typed() {
    for (name, raw) in [("bytom", bytom_transfer_tx()), ("vapor", vapor_vote_tx())] {
        let profile = ChainProfile::lookup(name).expect("Registered chain");
        let tx = annotate(&raw, profile).expect("Golden transaction annotates");
        assert!(tx.inputs.iter().all(|input| input.type_tag().is_some()));
        assert!(tx.outputs.iter().all(|output| output.type_tag().is_some()));
    }
}

#[test]
fn test_decoding_is_idempotent() {
    let text = serde_json::to_string(&bytom_transfer_tx()).expect("Serializable graph");
    let first = decode_raw_tx("bytom", &text).expect("Façade decodes");
    let second = decode_raw_tx("bytom", &text).expect("Façade decodes");
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_decodes_agree() {
    let text = serde_json::to_string(&vapor_vote_tx()).expect("Serializable graph");
    let expected = decode_raw_tx("vapor", &text).expect("Façade decodes");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| decode_raw_tx("vapor", &text)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("Decode thread"), Some(expected.clone()));
        }
    });
}
