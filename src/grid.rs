use std::fmt;
use data::{Direction, Site};
use disjoint_set::DisjointSet;
use error::{invalid, Result};

/// An n-by-n grid of sites, each blocked or open, with connectivity tracked
/// through a disjoint set over the `n*n` sites plus two virtual sites.
///
/// The virtual TOP site is joined to every open site in row 1 and the virtual
/// BOTTOM site to every open site in row n. A site is full when it shares a
/// class with TOP; the grid percolates when TOP and BOTTOM share a class.
#[derive(Debug, Clone)]
pub struct PercolationGrid {
	n: usize,
	open: Vec<Vec<bool>>,
	uf: DisjointSet,
	open_sites: usize,
	top: usize,
	bottom: usize,
}

impl PercolationGrid {
	/// Creates an n-by-n grid with all sites blocked.
	pub fn new(n: i64) -> Result<PercolationGrid> {
		if n <= 0 {
			return invalid(format!("grid size must be positive, got {}", n));
		}
		let n = n as usize;
		Ok(PercolationGrid {
			n,
			open: vec![vec![false; n]; n],
			uf: DisjointSet::make_singletons(n * n + 2),
			open_sites: 0,
			top: n * n,
			bottom: n * n + 1,
		})
	}

	pub fn size(&self) -> usize {
		self.n
	}

	/// Opens the site at (row, col). Opening an open site does nothing.
	pub fn open(&mut self, row: i64, col: i64) -> Result<()> {
		let site = self.site(row, col)?;
		self.open_site(site)
	}

	pub fn is_open(&self, row: i64, col: i64) -> Result<bool> {
		let site = self.site(row, col)?;
		Ok(self.open[site.row - 1][site.col - 1])
	}

	/// Whether the site is open and connected to the top row through open
	/// sites. A blocked site is never full.
	pub fn is_full(&mut self, row: i64, col: i64) -> Result<bool> {
		let site = self.site(row, col)?;
		self.is_full_site(site)
	}

	pub fn number_of_open_sites(&self) -> usize {
		self.open_sites
	}

	pub fn percolates(&mut self) -> bool {
		let (top, bottom) = (self.top, self.bottom);
		self.uf.connected(top, bottom)
	}

	pub fn open_site(&mut self, site: Site) -> Result<()> {
		self.check(site)?;
		if self.open[site.row - 1][site.col - 1] {
			return Ok(());
		}
		self.open[site.row - 1][site.col - 1] = true;
		self.open_sites += 1;

		let current = self.index(site);
		for &dir in Direction::adjacent_directions().iter() {
			if let Some(next) = site.step(dir, self.n) {
				if self.open[next.row - 1][next.col - 1] {
					let neighbour = self.index(next);
					self.uf.union(current, neighbour);
				}
			}
		}
		// both apply when n == 1
		if site.row == 1 {
			let top = self.top;
			self.uf.union(current, top);
		}
		if site.row == self.n {
			let bottom = self.bottom;
			self.uf.union(current, bottom);
		}
		Ok(())
	}

	pub fn is_open_site(&self, site: Site) -> Result<bool> {
		self.check(site)?;
		Ok(self.open[site.row - 1][site.col - 1])
	}

	pub fn is_full_site(&mut self, site: Site) -> Result<bool> {
		if !self.is_open_site(site)? {
			return Ok(false);
		}
		let (current, top) = (self.index(site), self.top);
		Ok(self.uf.connected(current, top))
	}

	fn index(&self, site: Site) -> usize {
		(site.row - 1) * self.n + (site.col - 1)
	}

	fn check(&self, site: Site) -> Result<()> {
		if site.row < 1 || site.row > self.n || site.col < 1 || site.col > self.n {
			return invalid(format!("site {} outside a {}x{} grid", site, self.n, self.n));
		}
		Ok(())
	}

	fn site(&self, row: i64, col: i64) -> Result<Site> {
		let n = self.n as i64;
		if row < 1 || row > n {
			return invalid(format!("row {} outside [1, {}]", row, n));
		}
		if col < 1 || col > n {
			return invalid(format!("col {} outside [1, {}]", col, n));
		}
		Ok(Site::new(row as usize, col as usize))
	}
}

impl fmt::Display for PercolationGrid {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let mut uf = self.uf.clone();
		for row in 1..(self.n + 1) {
			for col in 1..(self.n + 1) {
				let site = Site::new(row, col);
				let c = if !self.open[row - 1][col - 1] {
					'#'
				} else if uf.connected(self.index(site), self.top) {
					'~'
				} else {
					'.'
				};
				write!(f, "{}", c)?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}
