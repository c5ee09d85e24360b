// ============================================================================
// Basic Usage Example
// ============================================================================

use bignum_values::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .init();
    }

    println!("=== Big Numeric Values Example ===\n");

    // Integers beyond u64
    println!("Big integers...");
    let a = BigInteger::new("340282366920938463463374607431768211455")?;
    let b = BigInteger::from_base16("0x01")?;
    let sum = a.add(&b)?;
    println!("  {} + {} = {}", a, b, sum);
    println!("  {} - \"1000\" = {}", a, a.sub("1000")?);
    println!("  hex: {} ({} byte bracket)", sum.to_base16(), sum.size_in_bytes());
    println!("  {:?}", BigInteger::new(-255)?);

    // Decimals at a fixed scale
    println!("\nBig numbers at scale 4...");
    let config = NumericConfig::new().with_scale(4);
    let third = config.big_number(1)?.div(3, None)?;
    println!("  1 / 3 = {}", third);
    println!("  trimmed(2 retained) = {}", third.trim(2));
    println!("  x3 = {}", third.mul(3, None)?);

    // Floats never leak exponent notation
    println!("\nFloats...");
    let tiny = BigNumber::new(1.0e-7)?;
    println!("  1.0e-7 -> {}", tiny);
    println!("  zero at scale 4? {}", tiny.change_scale(4)?.is_zero());

    // Currency denominations
    println!("\n=== Token Amounts ===");
    let ether = BigNumber::new("0.042")?;
    let wei = ether.multiply_by_pow(10, 18, Some(0))?;
    println!("  {} ether = {} wei", ether, wei);
    println!("  fits native int: {}", wei.int()?);

    // Failures are typed
    println!("\n=== Rejected Inputs ===");
    for input in ["007", "1.5", "0x"] {
        println!("  BigInteger({:?}) -> {:?}", input, BigInteger::new(input).err());
    }
    println!("  BigNumber(\"1e10abc\") -> {:?}", BigNumber::new("1e10abc").err());
    println!(
        "  int(2^63) -> {:?}",
        BigNumber::new("9223372036854775808")?.int().err()
    );

    Ok(())
}
