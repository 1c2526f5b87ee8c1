use crate::address::{ADDRESS_LEN, Address, AddressError};

#[test]
fn test_base36() -> Result<(), anyhow::Error> {
    let address = Address::new_random();

    let base36 = address.dump_base36();
    assert_eq!(
        Address::new_from_base36(&base36)?,
        address,
        "Address should remain the same after base36 roundtrip"
    );
    assert_eq!(address.to_string(), base36);

    // Leading zero bytes are restored as padding
    let mut buf = [0u8; ADDRESS_LEN];
    buf[ADDRESS_LEN - 1] = 35;
    let small = Address::new_from_buf(&buf);
    assert_eq!(small.dump_base36(), "z");
    assert_eq!(Address::new_from_base36("z")?.dump_buf(), &buf);
    Ok(())
}

#[test]
fn test_invalid_base36() {
    assert!(matches!(
        Address::new_from_base36("not an address!"),
        Err(AddressError::InvalidBase36(_))
    ));
    for text in ["", "+z", "z_z"] {
        assert_eq!(
            Address::new_from_base36(text),
            Err(AddressError::InvalidBase36(text.to_string())),
            "{text:?} was accepted as an address"
        );
    }

    // 21 bytes of 0xFF does not fit
    let too_long = num_bigint::BigUint::from_bytes_be(&[0xFFu8; ADDRESS_LEN + 1]).to_str_radix(36);
    assert_eq!(
        Address::new_from_base36(&too_long),
        Err(AddressError::TooLong)
    );
}

#[test]
fn test_serde() -> Result<(), anyhow::Error> {
    let address = Address::new_random();

    let json = serde_json::to_string(&address)?;
    assert_eq!(json, format!("\"{}\"", address.dump_base36()));
    assert_eq!(serde_json::from_str::<Address>(&json)?, address);

    assert!(
        serde_json::from_str::<Address>("\"#bad\"").is_err(),
        "Invalid address string was accepted"
    );
    for json in ["\"+z\"", "\"z_z\""] {
        assert!(
            serde_json::from_str::<Address>(json).is_err(),
            "{json} was deserialized as an address"
        );
    }
    Ok(())
}
