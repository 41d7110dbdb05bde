/// Parses `PRODUCT=QUANTITY`, e.g. `A=3`.
pub fn parse_order_item(input: &str) -> Result<(String, f64), String> {
    let (product, quantity) = input
        .split_once('=')
        .ok_or_else(|| format!("Invalid order item {input}, expected PRODUCT=QUANTITY"))?;

    let product = product.trim();
    if product.is_empty() {
        return Err(format!("Invalid order item {input}, missing product"));
    }

    let quantity = quantity
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid quantity in order item {input}"))?;

    Ok((product.to_owned(), quantity))
}
