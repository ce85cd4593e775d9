use crate::model::product::Product;

/// Products shipped with the page, used when no catalog document is served.
pub fn bundled_products() -> Vec<Product> {
    vec![
        Product::new(
            1u64,
            "Vanilla Glow",
            "Jar Candles",
            "Soy wax jar candle with a warm vanilla bean scent.",
            "₹350",
            "🕯️",
        ),
        Product::new(
            2u64,
            "Rose Garden",
            "Scented Candles",
            "Hand-poured rose candle finished with dried petals.",
            "₹420",
            "🌹",
        )
        .with_original_price("₹500"),
        Product::new(
            3u64,
            "Lavender Calm",
            "Aromatherapy",
            "Lavender essential oil blend for slow evenings.",
            "₹380",
            "💜",
        ),
        Product::new(
            4u64,
            "Sandalwood Pillar",
            "Pillar Candles",
            "Tall pillar candle with a deep sandalwood finish.",
            "₹450",
            "🪵",
        ),
        Product::new(
            5u64,
            "Festive Diya Set",
            "Gift Sets",
            "Set of six decorated wax diyas for celebrations.",
            "₹599",
            "🪔",
        )
        .with_original_price("₹699"),
        Product::new(
            6u64,
            "Citrus Burst",
            "Scented Candles",
            "Orange and lemongrass candle in a reusable tin.",
            "₹299",
            "🍊",
        ),
    ]
}
