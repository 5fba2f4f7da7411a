use tablegrid::{CellPatch, CellShare, InsertOptions, RowBuilder, Side, TableBuilder, TableOptions};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut builder = TableBuilder::new(TableOptions::sized(640.0, 360.0));
    builder.header(true);

    let header = RowBuilder::from_contents(["Item", "Qty", "Price"])
        .set_cells_width(&[CellShare::new(0, 50.0)])
        .set_height(20.0)
        .set_all(&CellPatch::new().text(serde_json::json!({ "weight": "bold" })));
    builder.add_row(header, InsertOptions::append())?;

    builder
        .add_row(RowBuilder::with_cells(3), InsertOptions::append())?
        .add_row(RowBuilder::with_cells(3), InsertOptions::append())?
        .add_row(
            RowBuilder::with_cells(3),
            InsertOptions::at(2, Side::After).resize(true),
        )?;

    builder.populate_content(
        [
            ["apples", "3", "1.20"],
            ["pears", "5", "0.80"],
            ["plums", "12", "0.35"],
        ],
        false,
    );

    let table = builder.build()?;
    println!("{}", table.to_json_pretty()?);
    Ok(())
}
