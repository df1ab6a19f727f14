use crate::graph::node::{Node, NodeKind};
use crate::render::transported_label;
use crate::tui::app::App;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::Color::White;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Padding, Row, Table};

const SIZE_BAR_WIDTH: usize = 12;

pub fn draw_app(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let tables = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    frame.render_widget(build_header(app), chunks[0]);
    frame.render_widget(build_node_table(app), tables[0]);
    frame.render_widget(build_edge_table(app), tables[1]);
    frame.render_widget(build_footer(), chunks[3]);
}

pub fn kind_style(kind: NodeKind) -> Style {
    match kind {
        NodeKind::Producer => Style::default().fg(Color::Green),
        NodeKind::Consumer => Style::default().fg(Color::Red),
        NodeKind::Neutral => Style::default().fg(Color::DarkGray),
    }
}

/// Share of the largest absolute supply, in `[0.0, 1.0]`.
pub fn size_ratio(supply: i64, max_abs_supply: i64) -> f64 {
    if max_abs_supply > 0 {
        supply.unsigned_abs() as f64 / max_abs_supply.unsigned_abs() as f64
    } else {
        0.0
    }
}

pub fn size_bar(supply: i64, max_abs_supply: i64) -> String {
    let ratio = size_ratio(supply, max_abs_supply);
    let width = (ratio * SIZE_BAR_WIDTH as f64).round() as usize;
    // non-zero supplies stay visible
    let width = if supply != 0 { width.max(1) } else { 0 };
    "█".repeat(width)
}

fn build_header(app: &'_ App) -> Block<'_> {
    let graph = app.graph();
    let dim = Style::default().add_modifier(Modifier::DIM);
    let balance = if graph.is_balanced() {
        Span::raw("balanced").style(Style::default().fg(Color::Green))
    } else {
        Span::raw(format!("imbalance {:+}", graph.imbalance()))
            .style(Style::default().fg(Color::Yellow))
    };

    Block::new()
        .title(Line::from(vec![
            Span::raw(" Transportgraph ")
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw("—").style(dim),
            Span::raw(" Seed: ").style(dim),
            Span::raw(app.config().seed.to_string())
                .style(Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  Supply: ").style(dim),
            Span::raw(graph.total_supply().to_string()),
            Span::raw("  Demand: ").style(dim),
            Span::raw(graph.total_demand().to_string()),
            Span::raw("  "),
            balance,
            Span::raw(" "),
        ]))
        .title_alignment(Alignment::Center)
}

fn build_footer() -> Line<'static> {
    Line::from(vec![
        Span::raw(" q").style(Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" quit  "),
        Span::raw("n/p").style(Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" next/prev seed  "),
        Span::raw("b").style(Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" toggle balance"),
    ])
    .style(Style::default().add_modifier(Modifier::DIM))
}

fn node_row(node: &Node, max_abs_supply: i64, out_degree: usize, in_degree: usize) -> Row<'static> {
    let style = kind_style(node.kind());
    Row::new(vec![
        Cell::from(node.id().to_string()),
        Cell::from(format!("{:>6}", node.supply())).style(style),
        Cell::from(node.kind().to_string()).style(style),
        Cell::from(size_bar(node.supply(), max_abs_supply)).style(style),
        Cell::from(format!("{:>3}/{:<3}", out_degree, in_degree)),
    ])
}

fn build_node_table(app: &'_ App) -> Table<'_> {
    let graph = app.graph();
    let max_abs_supply = graph.max_abs_supply();

    Table::new(
        graph.nodes().iter().map(|node| {
            node_row(
                node,
                max_abs_supply,
                graph.outgoing(node.id()).len(),
                graph.incoming(node.id()).len(),
            )
        }),
        [
            Constraint::Length(4),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(SIZE_BAR_WIDTH as u16 + 1),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new([
            Cell::from("ID"),
            Cell::from("Supply"),
            Cell::from("Kind"),
            Cell::from("Size"),
            Cell::from("Out/In"),
        ])
        .style(Style::default().bg(Color::DarkGray).fg(White)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(format!(" Nodes ({}) ", graph.node_count()))
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

fn build_edge_table(app: &'_ App) -> Table<'_> {
    let graph = app.graph();

    Table::new(
        graph.edges().iter().map(|edge| {
            let label = transported_label(edge);
            let label_style = if edge.is_assigned() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            Row::new(vec![
                Cell::from(edge.source().to_string())
                    .style(kind_style(graph.node_by_id(edge.source()).kind())),
                Cell::from("→"),
                Cell::from(edge.target().to_string())
                    .style(kind_style(graph.node_by_id(edge.target()).kind())),
                Cell::from(label).style(label_style),
            ])
        }),
        [
            Constraint::Length(5),
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new([
            Cell::from("From"),
            Cell::from(""),
            Cell::from("To"),
            Cell::from("Transported"),
        ])
        .style(Style::default().bg(Color::DarkGray).fg(White)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(format!(" Edges ({}) ", graph.edges().len()))
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            ]))
            .padding(Padding::horizontal(1)),
    )
}
