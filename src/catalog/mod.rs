pub mod favorites;
pub mod filter;
pub mod pagination;
pub mod view;

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info, warn};

use crate::models::{
    Course, CourseId, CreditFilter, CriteriaUpdate, FilterCriteria, LevelFilter, SemesterFilter,
};

pub use favorites::Favorites;
pub use filter::filter_courses;
pub use pagination::{PAGE_SIZE, PageInfo};
pub use view::{CatalogView, CourseCard, CreditOption, DetailView};

/// Browsing state for one session: the loaded courses plus everything the user
/// has chosen (criteria, favorites, page, open detail).
///
/// Filtered results and page windows are never stored; every read derives them
/// from the current state.
#[derive(Debug, Clone)]
pub struct CatalogState {
    courses: Vec<Course>,
    index: HashMap<CourseId, usize>,
    credit_options: Vec<u32>,
    criteria: FilterCriteria,
    favorites: Favorites,
    current_page: usize,
    selected: Option<CourseId>,
}

impl CatalogState {
    pub fn new(courses: Vec<Course>) -> Self {
        let mut state = Self {
            courses: Vec::new(),
            index: HashMap::new(),
            credit_options: Vec::new(),
            criteria: FilterCriteria::default(),
            favorites: Favorites::new(),
            current_page: 1,
            selected: None,
        };
        state.replace_courses(courses);
        state
    }

    /// Swaps in a new record set, dropping favorites and selection that no longer resolve.
    pub fn replace_courses(&mut self, courses: Vec<Course>) {
        let mut index = HashMap::with_capacity(courses.len());
        let mut unique = Vec::with_capacity(courses.len());
        for course in courses {
            if index.contains_key(&course.id) {
                // first occurrence wins on duplicate ids
                warn!("dropping duplicate course id {} ({})", course.id, course.header);
                continue;
            }
            index.insert(course.id, unique.len());
            unique.push(course);
        }
        let courses = unique;

        self.credit_options = courses
            .iter()
            .map(|c| c.credits)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        self.courses = courses;
        self.index = index;

        if let CreditFilter::Exactly(credits) = self.criteria.credits {
            if !self.credit_options.contains(&credits) {
                debug!("no course carries {} credits any more, credit filter reset", credits);
                self.criteria.credits = CreditFilter::Any;
            }
        }

        let before = self.favorites.len();
        let index = &self.index;
        self.favorites.retain(|id| index.contains_key(id));
        if self.favorites.len() != before {
            debug!("pruned {} stale favorites", before - self.favorites.len());
        }
        if self.selected.is_some_and(|id| !self.index.contains_key(&id)) {
            self.selected = None;
        }
        self.clamp_current_page();

        info!(
            "catalog loaded: {} courses, credit options {:?}",
            self.courses.len(),
            self.credit_options
        );
    }

    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.index.get(&id).map(|&pos| &self.courses[pos])
    }

    /// Distinct credit values across all loaded courses, ascending.
    pub fn credit_options(&self) -> &[u32] {
        &self.credit_options
    }

    // --- criteria ---

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        debug!("criteria changed: {:?}", criteria);
        self.criteria = criteria;
        self.clamp_current_page();
    }

    pub fn update_criteria(&mut self, update: CriteriaUpdate) {
        let mut criteria = self.criteria.clone();
        update.apply_to(&mut criteria);
        self.set_criteria(criteria);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let criteria = FilterCriteria {
            search: search.into(),
            ..self.criteria.clone()
        };
        self.set_criteria(criteria);
    }

    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    pub fn set_level_filter(&mut self, level: LevelFilter) {
        let criteria = FilterCriteria { level, ..self.criteria.clone() };
        self.set_criteria(criteria);
    }

    pub fn set_credit_filter(&mut self, credits: CreditFilter) {
        let criteria = FilterCriteria { credits, ..self.criteria.clone() };
        self.set_criteria(criteria);
    }

    pub fn set_semester_filter(&mut self, semester: SemesterFilter) {
        let criteria = FilterCriteria { semester, ..self.criteria.clone() };
        self.set_criteria(criteria);
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        let criteria = FilterCriteria { favorites_only, ..self.criteria.clone() };
        self.set_criteria(criteria);
    }

    // --- derived views ---

    pub fn filtered(&self) -> Vec<&Course> {
        filter_courses(&self.courses, &self.criteria, &self.favorites)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered_count(), PAGE_SIZE)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The slice of the filtered courses on the current page.
    pub fn displayed(&self) -> Vec<&Course> {
        let filtered = self.filtered();
        pagination::page_slice(&filtered, self.current_page, PAGE_SIZE).to_vec()
    }

    pub fn view(&self) -> CatalogView {
        let filtered = self.filtered();
        let total_pages = pagination::total_pages(filtered.len(), PAGE_SIZE);
        let courses: Vec<CourseCard> =
            pagination::page_slice(&filtered, self.current_page, PAGE_SIZE)
                .iter()
                .map(|course| CourseCard::new(course, self.is_favorite(course.id)))
                .collect();

        CatalogView {
            shown: courses.len(),
            filtered: filtered.len(),
            total: self.courses.len(),
            page: PageInfo::new(self.current_page, total_pages),
            criteria: self.criteria.clone(),
            credit_options: self.credit_options.iter().copied().map(CreditOption::new).collect(),
            courses,
        }
    }

    // --- pagination ---

    pub fn go_to_previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn go_to_next_page(&mut self) {
        self.current_page = (self.current_page + 1).min(self.total_pages());
    }

    /// Jumps to `page`, clamped into the valid range.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = pagination::clamp_page(page, self.total_pages());
    }

    fn clamp_current_page(&mut self) {
        let clamped = pagination::clamp_page(self.current_page, self.total_pages());
        if clamped != self.current_page {
            debug!("page {} out of range, clamped to {}", self.current_page, clamped);
            self.current_page = clamped;
        }
    }

    // --- favorites ---

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn is_favorite(&self, id: CourseId) -> bool {
        self.favorites.contains(id)
    }

    /// Flips favorite membership for `id`. `None` if no loaded course has that id.
    pub fn toggle_favorite(&mut self, id: CourseId) -> Option<bool> {
        if !self.index.contains_key(&id) {
            debug!("ignoring favorite toggle for unknown course {}", id);
            return None;
        }
        let now_favorite = self.favorites.toggle(id);
        debug!("course {} favorite = {}", id, now_favorite);
        if self.criteria.favorites_only {
            self.clamp_current_page();
        }
        Some(now_favorite)
    }

    // --- selection ---

    /// Opens `id` for detail, replacing any prior selection.
    pub fn open_detail(&mut self, id: CourseId) -> Option<&Course> {
        let pos = *self.index.get(&id)?;
        self.selected = Some(id);
        Some(&self.courses[pos])
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Course> {
        self.selected.and_then(|id| self.course(id))
    }

    pub fn detail_view(&self) -> Option<DetailView> {
        self.selected()
            .map(|course| DetailView::new(course, self.is_favorite(course.id)))
    }
}
