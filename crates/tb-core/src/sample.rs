//! Demo catalog: a small sales pipeline

use crate::catalog::Catalog;
use crate::names::{ColumnName, TableName, TransformationName};
use crate::table::{Column, ColumnRef, Table};
use crate::table_type::TableType;
use crate::transformation::{ColumnMapping, Transformation, TransformationType};

const ORDER_PROCESSING_SQL: &str = "INSERT INTO orders (customer_id, product_id, order_date, amount)
SELECT c.customer_id, p.product_id, CURRENT_DATE, p.price
FROM customers c, products p
WHERE c.customer_id = ?";

const SALES_AGGREGATION_SQL: &str = "INSERT INTO sales_summary (date, product_id, total_sales, units_sold)
SELECT DATE(o.order_date), o.product_id, SUM(o.amount), COUNT(*)
FROM orders o
JOIN products p ON o.product_id = p.product_id
GROUP BY DATE(o.order_date), o.product_id";

fn column(name: &str, data_type: &str, description: &str) -> Column {
    Column::new(ColumnName::new(name), data_type).with_description(description)
}

fn sourced(name: &str, data_type: &str, description: &str, source: &str) -> Column {
    column(name, data_type, description).with_sources([source])
}

fn mapping(source: (&str, &str), target: (&str, &str), rule: &str) -> ColumnMapping {
    ColumnMapping::new(
        ColumnRef::new(source.0, source.1),
        ColumnRef::new(target.0, target.1),
        rule,
    )
}

/// Build the demo catalog with quality scores computed
pub fn sample_catalog() -> Catalog {
    let tables = vec![
        Table::new(TableName::new("customers"), "sales")
            .with_description("Customer information table")
            .with_type(TableType::PostgreSql)
            .with_jobs(["JOB_LOAD_CUSTOMERS", "JOB_VALIDATE_CUSTOMERS"])
            .with_columns(vec![
                column("customer_id", "INT", "Primary key"),
                column("customer_name", "VARCHAR", "Full name"),
                column("email", "VARCHAR", "Email address"),
            ]),
        Table::new(TableName::new("orders"), "sales")
            .with_description("Order details table")
            .with_type(TableType::MySql)
            .with_jobs(["JOB_LOAD_ORDERS", "JOB_PROCESS_ORDERS"])
            .with_columns(vec![
                column("order_id", "INT", "Primary key"),
                sourced(
                    "customer_id",
                    "INT",
                    "Foreign key to customers",
                    "customers.customer_id",
                ),
                sourced(
                    "product_id",
                    "INT",
                    "Foreign key to products",
                    "products.product_id",
                ),
                column("order_date", "DATE", "Date of purchase"),
                column("amount", "DECIMAL", "Purchase amount"),
            ]),
        Table::new(TableName::new("products"), "inventory")
            .with_description("Product information table")
            .with_type(TableType::Oracle)
            .with_jobs(["JOB_UPDATE_PRODUCTS"])
            .with_columns(vec![
                column("product_id", "INT", "Primary key"),
                column("product_name", "VARCHAR", "Product name"),
                column("category", "VARCHAR", "Product category"),
                column("price", "DECIMAL", "Unit price"),
            ]),
        Table::new(TableName::new("sales_summary"), "analytics")
            .with_description("Aggregated sales data")
            .with_type(TableType::Snowflake)
            .with_jobs(["JOB_GENERATE_SALES_SUMMARY", "JOB_EXPORT_ANALYTICS"])
            .with_columns(vec![
                column("date", "DATE", "Sales date"),
                sourced("product_id", "INT", "Product identifier", "products.product_id"),
                sourced("total_sales", "DECIMAL", "Total sales amount", "orders.amount"),
                sourced("units_sold", "INT", "Number of units sold", "orders.product_id"),
            ]),
    ];

    let transformations = vec![
        Transformation::new(
            TransformationName::new("order_processing"),
            TransformationType::Sql,
            ["customers", "products"],
            ["orders"],
        )
        .with_logic(ORDER_PROCESSING_SQL)
        .with_description("Process new orders")
        .with_jobs(["JOB_ORDER_ETL", "JOB_ORDER_VALIDATION"])
        .with_mappings(vec![
            mapping(("customers", "customer_id"), ("orders", "customer_id"), "Direct copy"),
            mapping(("products", "product_id"), ("orders", "product_id"), "Direct copy"),
            mapping(("products", "price"), ("orders", "amount"), "Direct copy"),
        ]),
        Transformation::new(
            TransformationName::new("sales_aggregation"),
            TransformationType::Sql,
            ["orders", "products"],
            ["sales_summary"],
        )
        .with_logic(SALES_AGGREGATION_SQL)
        .with_description("Aggregate sales data daily")
        .with_jobs(["JOB_DAILY_AGGREGATION", "JOB_SALES_SUMMARY"])
        .with_mappings(vec![
            mapping(("orders", "order_date"), ("sales_summary", "date"), "Convert to date"),
            mapping(("orders", "product_id"), ("sales_summary", "product_id"), "Direct copy"),
            mapping(("orders", "amount"), ("sales_summary", "total_sales"), "Sum aggregation"),
            mapping(("orders", "product_id"), ("sales_summary", "units_sold"), "Count aggregation"),
        ]),
    ];

    Catalog::from_parts(tables, transformations)
}
