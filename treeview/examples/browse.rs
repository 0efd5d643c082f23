use std::cell::{Cell as StdCell, RefCell};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    style::{Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};
use treeview::{
    Buffer, CellMeasure, CellPlotter, CoreWindow, FieldData, FieldDesc, FieldFlags, MouseButton,
    MouseState, NodeId, NodeMsg, Rect, Relationship, Rgb, Schema, SystemColours, Theme, Tree,
    TreeCallbacks, TreeConfig,
};

const DOUBLE_CLICK: Duration = Duration::from_millis(400);
const MAX_DEPTH: usize = 3;

/// Collects what the tree tells the host between frames.
#[derive(Clone, Default)]
struct Host {
    dirty: Rc<StdCell<bool>>,
    status: Rc<RefCell<String>>,
}

impl TreeCallbacks<PathBuf> for Host {
    fn folder(&mut self, msg: NodeMsg, data: &mut PathBuf) {
        if msg == NodeMsg::Deleted {
            log::debug!("folder {} removed", data.display());
        }
    }

    fn entry(&mut self, msg: NodeMsg, data: &mut PathBuf) {
        match msg {
            NodeMsg::Deleted => log::debug!("entry {} removed", data.display()),
            NodeMsg::Launch { .. } => {
                log::info!("launch {}", data.display());
                *self.status.borrow_mut() = format!("launch: {}", data.display());
            }
        }
    }
}

impl CoreWindow for Host {
    fn redraw_request(&mut self, rect: Rect) {
        log::trace!("redraw {:?}", rect);
        self.dirty.set(true);
    }
}

struct Fields {
    name: Arc<str>,
    size: Arc<str>,
    kind: Arc<str>,
    folder: Arc<str>,
}

impl Fields {
    fn new() -> Self {
        Self {
            name: Arc::from("Name"),
            size: Arc::from("Size"),
            kind: Arc::from("Type"),
            folder: Arc::from("Folder"),
        }
    }

    fn schema(&self) -> treeview::Result<Schema> {
        Schema::new(vec![
            FieldDesc::new(Arc::clone(&self.name), FieldFlags::default_field()),
            FieldDesc::new(Arc::clone(&self.size), FieldFlags::show_name()),
            FieldDesc::new(Arc::clone(&self.kind), FieldFlags::show_name()),
            FieldDesc::new(Arc::clone(&self.folder), FieldFlags::default_field()),
        ])
    }
}

/// Terminal session; restores the terminal when dropped.
struct Screen {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
}

impl Screen {
    fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
        })
    }

    fn paint(&mut self, tree: &Tree<PathBuf>, theme: &Theme, scroll: i32, status: &str) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        let rows = height.saturating_sub(1) as i32;
        let clip = Rect::new(0, scroll, width as i32, rows);
        {
            let mut plot = CellPlotter::new(&mut self.current, theme.metrics.baseline());
            tree.redraw(0, -scroll, clip, theme, &mut plot);
        }

        let status_row = Rect::new(0, rows, width as i32, 1);
        self.current.fill(status_row, theme.odd.sbg.fill);
        for (i, ch) in status.chars().take(width as usize).enumerate() {
            if let Some(cell) = self.current.get_mut(i as i32, rows) {
                cell.char = ch;
            }
        }

        self.flush()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut last: Option<(u16, u16)> = None;
        let mut fg = None;
        let mut bg = None;
        for (x, y, cell) in self.current.diff(&self.previous) {
            if cell.wide_continuation {
                continue;
            }
            if last != Some((x.wrapping_sub(1), y)) {
                execute!(self.stdout, cursor::MoveTo(x, y))?;
            }
            if fg != Some(cell.fg) {
                execute!(self.stdout, SetForegroundColor(colour(cell.fg)))?;
                fg = Some(cell.fg);
            }
            if bg != Some(cell.bg) {
                execute!(self.stdout, SetBackgroundColor(colour(cell.bg)))?;
                bg = Some(cell.bg);
            }
            write!(self.stdout, "{}", cell.char)?;
            last = Some((x, y));
        }
        self.stdout.flush()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn colour(c: Rgb) -> CtColor {
    CtColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

fn human_size(bytes: u64) -> String {
    match bytes {
        b if b >= 1 << 20 => format!("{}MB", b >> 20),
        b if b >= 1 << 10 => format!("{}KB", b >> 10),
        b => format!("{b}B"),
    }
}

/// Add `dir`'s contents below `parent`, folders first.
fn populate(
    tree: &mut Tree<PathBuf>,
    fields: &Fields,
    parent: Option<NodeId>,
    dir: &Path,
    depth: usize,
) -> treeview::Result<()> {
    let Ok(read) = fs::read_dir(dir) else {
        log::warn!("cannot read {}", dir.display());
        return Ok(());
    };
    let mut items: Vec<_> = read.filter_map(|e| e.ok()).collect();
    items.sort_by_key(|e| (!e.path().is_dir(), e.file_name()));

    let mut prev: Option<NodeId> = None;
    for item in items {
        let path = item.path();
        let name = item.file_name().to_string_lossy().into_owned();
        let (relation, rel) = match prev {
            Some(p) => (Some(p), Relationship::NextSibling),
            None => (parent, Relationship::FirstChild),
        };

        let id = if path.is_dir() {
            let id = tree.create_folder(relation, rel, &FieldData::new(&fields.folder, name), path.clone())?;
            if depth < MAX_DEPTH {
                populate(tree, fields, Some(id), &path, depth + 1)?;
            }
            id
        } else {
            let size = item.metadata().map(|m| m.len()).unwrap_or(0);
            let kind = path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_else(|| "file".to_string());
            let data = [
                FieldData::new(&fields.name, name),
                FieldData::new(&fields.size, human_size(size)),
                FieldData::new(&fields.kind, kind),
            ];
            tree.create_entry(relation, rel, &data, path)?
        };
        prev = Some(id);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("browse.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    let mut theme = Theme::init(&TreeConfig::cells(), SystemColours::default(), &CellMeasure);
    theme.resources.mark_ready(treeview::IconKind::Folder, 1);
    theme.resources.mark_ready(treeview::IconKind::Content, 1);

    let fields = Fields::new();
    let host = Host::default();
    let mut tree: Tree<PathBuf> = Tree::new(
        fields.schema()?,
        &theme,
        Box::new(CellMeasure),
        Box::new(host.clone()),
        Box::new(host.clone()),
    )?;
    populate(&mut tree, &fields, None, &dir, 0)?;
    log::info!("loaded {} nodes from {}", tree.len(), dir.display());

    let mut screen = Screen::new()?;
    let mut scroll = 0;
    let mut last_click: Option<(Instant, u16, u16)> = None;
    host.dirty.set(true);

    loop {
        if host.dirty.replace(false) {
            let status = format!(
                " {} | a: select all  c: clear  d: delete selected  q: quit {}",
                dir.display(),
                host.status.borrow()
            );
            screen.paint(&tree, &theme, scroll, &status)?;
        }

        let visible_rows = screen.previous.height().saturating_sub(1) as i32;
        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('a') => {
                    if tree.select_all().is_some() {
                        host.dirty.set(true);
                    }
                }
                KeyCode::Char('c') => {
                    if tree.clear_selection().is_some() {
                        host.dirty.set(true);
                    }
                }
                KeyCode::Char('d') => {
                    let doomed: Vec<NodeId> = tree.selected().collect();
                    for id in doomed {
                        if tree.contains(id) {
                            tree.delete_node(id)?;
                        }
                    }
                    host.dirty.set(true);
                }
                _ => {}
            },
            Event::Mouse(mouse) => {
                let x = mouse.column as i32;
                let y = mouse.row as i32 + scroll;
                let modifiers = |mut state: MouseState| {
                    state.mod_1 = mouse.modifiers.contains(KeyModifiers::SHIFT);
                    state.mod_2 = mouse.modifiers.contains(KeyModifiers::CONTROL);
                    state.mod_3 = mouse.modifiers.contains(KeyModifiers::ALT);
                    state
                };
                match mouse.kind {
                    MouseEventKind::Down(event::MouseButton::Left) => {
                        tree.mouse_action(modifiers(MouseState::press(MouseButton::Left)), x, y);
                    }
                    MouseEventKind::Down(event::MouseButton::Right) => {
                        tree.mouse_action(modifiers(MouseState::press(MouseButton::Right)), x, y);
                    }
                    MouseEventKind::Up(event::MouseButton::Left) => {
                        let now = Instant::now();
                        let double = last_click.is_some_and(|(at, cx, cy)| {
                            now.duration_since(at) < DOUBLE_CLICK && (cx, cy) == (mouse.column, mouse.row)
                        });
                        let state = if double {
                            last_click = None;
                            MouseState::double_click(MouseButton::Left)
                        } else {
                            last_click = Some((now, mouse.column, mouse.row));
                            MouseState::click(MouseButton::Left)
                        };
                        tree.mouse_action(modifiers(state), x, y);
                    }
                    MouseEventKind::ScrollDown => {
                        let max = (tree.height() - visible_rows).max(0);
                        if scroll < max {
                            scroll += 1;
                            host.dirty.set(true);
                        }
                    }
                    MouseEventKind::ScrollUp => {
                        if scroll > 0 {
                            scroll -= 1;
                            host.dirty.set(true);
                        }
                    }
                    _ => {}
                }
            }
            Event::Resize(..) => host.dirty.set(true),
            _ => {}
        }
    }

    drop(screen);
    tree.destroy();
    theme.fini();
    Ok(())
}
