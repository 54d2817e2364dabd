use rand::Rng;
use std::time::Duration;

/// Delay between animation frames on the welcome screen
pub const FRAME_INTERVAL: Duration = Duration::from_millis(60);

/// Width of the bar in cells, including the two edge cells the head never
/// reaches on its way back.
pub const BAR_WIDTH: usize = 66;

/// Letters sit on every `BLOCK_SPACING`th cell
pub const BLOCK_SPACING: usize = 6;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// What a single cell of the bar shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Head,
    Letter(char),
    Blank,
}

/// Bouncing block that sweeps across a row of random letters.
///
/// The head eats letters as it moves right; a fresh row is drawn every time
/// it hits the right edge.
#[derive(Debug, Clone, Default)]
pub struct WelcomeBar {
    frame: usize,
    letters: Option<Vec<Option<char>>>,
}

impl WelcomeBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Head column for the current frame
    pub fn head_pos(&self) -> usize {
        head_pos(self.frame)
    }

    pub fn advance(&mut self) {
        self.advance_with(&mut rand::thread_rng());
    }

    pub fn advance_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.letters.is_none() || self.head_pos() == BAR_WIDTH - 2 {
            self.letters = Some(random_letters(rng));
        }
        self.frame += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn cell(&self, i: usize) -> Cell {
        let head = self.head_pos();
        if i == head {
            return Cell::Head;
        }
        if i % BLOCK_SPACING != 0 || i < head {
            return Cell::Blank;
        }
        self.letters
            .as_ref()
            .and_then(|letters| letters.get(i).copied().flatten())
            .map_or(Cell::Blank, Cell::Letter)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..BAR_WIDTH).map(|i| self.cell(i))
    }
}

fn head_pos(frame: usize) -> usize {
    let span = BAR_WIDTH - 2;
    let pos = frame % (span * 2);
    if pos >= span {
        span * 2 - pos
    } else {
        pos
    }
}

fn random_letters<R: Rng + ?Sized>(rng: &mut R) -> Vec<Option<char>> {
    (0..BAR_WIDTH)
        .map(|i| {
            (i % BLOCK_SPACING == 0).then(|| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn head_bounces_between_edges() {
        assert_eq!(head_pos(0), 0);
        assert_eq!(head_pos(10), 10);
        assert_eq!(head_pos(64), 64);
        assert_eq!(head_pos(65), 63);
        assert_eq!(head_pos(127), 1);
        assert_eq!(head_pos(128), 0);
    }

    #[test]
    fn fresh_bar_has_no_letters() {
        let bar = WelcomeBar::new();
        assert_eq!(bar.cell(0), Cell::Head);
        assert!(bar.cells().skip(1).all(|c| c == Cell::Blank));
    }

    #[test]
    fn first_advance_draws_letters_on_block_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut bar = WelcomeBar::new();
        bar.advance_with(&mut rng);

        assert_eq!(bar.frame(), 1);
        assert_eq!(bar.head_pos(), 1);
        for i in 2..BAR_WIDTH {
            match bar.cell(i) {
                Cell::Letter(c) => {
                    assert_eq!(i % BLOCK_SPACING, 0);
                    assert!(c.is_ascii_alphabetic());
                }
                Cell::Blank => assert_ne!(i % BLOCK_SPACING, 0),
                Cell::Head => panic!("head at {i}"),
            }
        }
    }

    #[test]
    fn head_hides_letters_behind_it() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut bar = WelcomeBar::new();
        for _ in 0..20 {
            bar.advance_with(&mut rng);
        }
        assert_eq!(bar.head_pos(), 20);
        assert_eq!(bar.cell(6), Cell::Blank);
        assert_eq!(bar.cell(12), Cell::Blank);
        assert!(matches!(bar.cell(24), Cell::Letter(_)));
    }

    #[test]
    fn letters_refresh_at_right_edge() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut bar = WelcomeBar::new();
        bar.advance_with(&mut rng);
        let before = bar.letters.clone();

        while bar.head_pos() != BAR_WIDTH - 2 {
            bar.advance_with(&mut rng);
            assert_eq!(bar.letters, before);
        }
        bar.advance_with(&mut rng);
        assert_ne!(bar.letters, before);
    }

    #[test]
    fn reset_rewinds() {
        let mut bar = WelcomeBar::new();
        bar.advance();
        bar.advance();
        bar.reset();
        assert_eq!(bar.frame(), 0);
        assert_eq!(bar.cell(6), Cell::Blank);
    }
}
