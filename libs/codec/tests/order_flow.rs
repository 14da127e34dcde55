//! End-to-end order flow: assemble, hash, encode fill calldata.

use codec::{
    new_rfq_order, verify_salt, Extension, ExtensionBuilder, LimitOrder, MakerTraits,
    RfqOrderOptions, RouterAbi, TakerTraits,
};
use types::{Address, OrderInfo, U256, UINT_160_MAX};

fn usdt_for_inch() -> OrderInfo {
    OrderInfo {
        maker_asset: "0xdac17f958d2ee523a2206206994597c13d831ec7".parse().unwrap(),
        taker_asset: "0x111111111117dc0aa78b770fa6a738034120c302".parse().unwrap(),
        making_amount: U256::from(100_000_000u64),
        taking_amount: U256::from(10_000_000_000_000_000_000u128),
        maker: "0x00000000219ab540356cbb839cbe05303d7705fa".parse().unwrap(),
        salt: Some(U256::zero()),
        receiver: None,
    }
}

fn eoa_signature() -> String {
    let mut bytes = vec![0x42u8; 32];
    bytes.extend_from_slice(&[0x24u8; 32]);
    bytes.push(28);
    format!("0x{}", hex::encode(bytes))
}

#[test]
fn plain_order_hashes_to_reference_digest() {
    let order = LimitOrder::new(usdt_for_inch(), MakerTraits::default(), Extension::default())
        .unwrap();
    assert_eq!(
        order.get_order_hash(1),
        "0x1e8c7f2446e92bbefe722eb7d7f636ed8cdb0c08edb92debff5975cf8ee5c328"
    );
    assert!(order.receiver().is_zero());
    assert!(!order.is_private());
}

#[test]
fn extension_order_binds_salt_and_survives_calldata() {
    let extension = ExtensionBuilder::new()
        .with_custom_data("0xdeadbeef")
        .unwrap()
        .build();
    let mut info = usdt_for_inch();
    info.salt = None;
    let order = LimitOrder::new(info, MakerTraits::default(), extension.clone()).unwrap();

    assert!(order.maker_traits().has_extension());
    assert_eq!(
        order.salt() & UINT_160_MAX,
        extension.keccak256() & UINT_160_MAX
    );
    verify_salt(order.salt(), &extension).unwrap();

    let rebuilt = LimitOrder::from_calldata(&order.to_calldata(), extension).unwrap();
    assert_eq!(rebuilt, order);
}

#[test]
fn maker_traits_reach_the_wire_struct() {
    let sender = Address::from_uint(&UINT_160_MAX).unwrap();
    let traits = MakerTraits::default()
        .with_allowed_sender(&sender)
        .allow_partial_fills()
        .allow_multiple_fills()
        .with_epoch(types::UINT_40_MAX, types::UINT_40_MAX)
        .unwrap()
        .with_expiration(types::UINT_40_MAX)
        .unwrap()
        .with_extension()
        .enable_permit2()
        .enable_native_unwrap()
        .enable_pre_interaction()
        .enable_post_interaction();
    let order = LimitOrder::new(usdt_for_inch(), traits, Extension::default()).unwrap();
    assert_eq!(
        format!("{:x}", order.build().maker_traits),
        "5f800000000000ffffffffffffffffffffffffffffffffffffffffffffffffff"
    );
    assert!(order.is_private());
}

#[test]
fn rfq_order_fills_through_the_router() {
    let mut info = usdt_for_inch();
    info.salt = None;
    let order = new_rfq_order(
        info,
        RfqOrderOptions {
            nonce: 12,
            expiration: 1_756_000_000,
            ..Default::default()
        },
    )
    .unwrap();

    let abi = RouterAbi::new();
    let taker = TakerTraits::new()
        .with_threshold(U256::from(99_000_000u64))
        .unwrap();
    let calldata = abi
        .fill_order_calldata(&order, &eoa_signature(), &taker, order.taking_amount())
        .unwrap();
    assert_eq!(&calldata[..4], &[0x05, 0x50, 0xc9, 0xbf]);

    // the same taker with an interaction must go through the args form
    let taker = taker.with_interaction(codec::Interaction::new(
        "0x1111111254eeb25477b68fb85ed929f73a960582".parse().unwrap(),
        vec![0x01],
    ));
    assert!(abi
        .fill_order_calldata(&order, &eoa_signature(), &taker, order.taking_amount())
        .is_err());
    let calldata = abi
        .fill_order_args_calldata(&order, &eoa_signature(), &taker, order.taking_amount())
        .unwrap();
    assert_eq!(&calldata[..4], &[0x5d, 0x9d, 0xbf, 0x53]);
}

#[test]
fn typed_data_matches_wire_struct() {
    let order = LimitOrder::new(usdt_for_inch(), MakerTraits::default(), Extension::default())
        .unwrap();
    let doc = order.get_typed_data(1);
    let wire = serde_json::to_value(order.build()).unwrap();
    assert_eq!(doc["message"], wire);
    assert_eq!(doc["domain"]["chainId"], 1);
}
