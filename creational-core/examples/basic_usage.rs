use creational_core::{
    from, order_by_category, BuilderConfig, ComputerBuilder, KeywordCase, QueryBuilder,
    SelectPolicy, SortDirection, StatementBuilder,
};
use tracing::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .init();

    println!("=== creational-core - Basic Usage Examples ===\n");

    // Additive select (default)
    let users_query = from("users")
        .select(("id", "name", "email"))
        .where_("age > 18")
        .where_("country = 'Cri'")
        .order_by("name", SortDirection::Asc)
        .limit(10);

    println!("1. Statement:");
    println!("   SQL: {}\n", users_query.to_sql()?);

    // Replacing select, lowercase keywords
    let config = BuilderConfig::new()
        .select_policy(SelectPolicy::Replacing)
        .keyword_case(KeywordCase::Lower);
    let replaced = StatementBuilder::with_config("users", config)
        .select(("id", "name"))
        .select(("id", "name", "email"))
        .where_("age > 18")
        .order_by_asc("name")
        .order_by_desc("age")
        .limit(10);

    println!("2. Replacing select:");
    println!("   SQL: {}\n", replaced.render());

    // Builder
    let gaming = ComputerBuilder::new()
        .cpu("Intel Core i9")
        .ram("32GB")
        .storage("1TB SSD")
        .gpu("Nvidia RTX 3090")
        .build();

    println!("3. Computer:");
    println!("{}\n", gaming);

    // Factory Method
    println!("4. Restaurant:");
    for category in ["chicken", "beef", "bean", "tofu"] {
        match order_by_category(category) {
            Ok(order) => println!("   {}", order),
            Err(err) => println!("   {}", err),
        }
    }

    Ok(())
}
