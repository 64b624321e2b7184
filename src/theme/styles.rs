//! Global CSS styles for the gallery site.
//!
//! Light portfolio palette: warm paper background, ink text, one accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --background: #faf8f5;
  --card: #ffffff;
  --overlay: rgba(20, 18, 16, 0.72);
  --border: #e6e1da;

  /* TEXT */
  --foreground: #1f1c19;
  --muted-foreground: #7a736b;

  /* ACCENT */
  --primary: #8a5a2b;
  --primary-foreground: #ffffff;
  --secondary: #efe8df;
  --secondary-foreground: #4a3f35;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  --radius: 0.5rem;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--background);
  color: var(--foreground);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.5;
}

.page {
  max-width: 1200px;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

/* === Section Header === */
.gallery-section {
  display: flex;
  flex-direction: column;
}

.gallery-section__header {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  padding-bottom: 2rem;
  text-align: center;
}

.section-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 600;
}

.section-description {
  color: var(--muted-foreground);
  max-width: 42rem;
}

/* === Filter Bar === */
.filter-bar {
  background: var(--card);
  margin-bottom: 2rem;
  width: 100%;
}

.filter-bar__grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1.5rem;
}

.filter-select {
  width: 100%;
  min-width: 200px;
}

.filter-select__label {
  display: block;
  margin-bottom: 0.5rem;
  padding-left: 0.25rem;
  font-size: var(--text-sm);
  font-weight: 500;
}

.filter-select__control {
  width: 100%;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--card);
  color: var(--foreground);
  font: inherit;
  cursor: pointer;
}

.filter-select__control:focus {
  outline: 2px solid var(--primary);
  outline-offset: 1px;
}

/* === Grid === */
.gallery-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1rem;
}

.gallery-empty {
  grid-column: 1 / -1;
  padding: 2.5rem 0;
  color: var(--muted-foreground);
  text-align: center;
}

.gallery-card {
  position: relative;
  display: block;
  width: 100%;
  overflow: hidden;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--card);
  cursor: pointer;
  text-align: left;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.gallery-card:hover {
  transform: translateY(-2px);
  box-shadow: 0 8px 24px rgba(31, 28, 25, 0.12);
}

.gallery-card__frame {
  aspect-ratio: 4 / 3;
  overflow: hidden;
}

.gallery-card__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-normal);
}

.gallery-card:hover .gallery-card__img {
  transform: scale(1.04);
}

.gallery-card__label {
  padding: 0.75rem 1rem;
  font-weight: 500;
}

/* === Dialog === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: var(--overlay);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 1rem;
  animation: fade-in var(--transition-normal);
}

.gallery-dialog {
  position: relative;
  width: 100%;
  max-width: 56rem;
  max-height: 90vh;
  overflow-y: auto;
  background: var(--card);
  border-radius: var(--radius);
}

.gallery-dialog__close {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  z-index: 1;
}

.gallery-dialog__body {
  display: flex;
  flex-direction: column;
}

.gallery-dialog__media {
  position: relative;
  width: 100%;
  max-width: 42rem;
  aspect-ratio: 1 / 1;
}

.gallery-dialog__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: var(--radius) var(--radius) 0 0;
}

.gallery-dialog__info {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 3.5rem 1.5rem 1.5rem;
}

.gallery-dialog__title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
}

.gallery-dialog__description {
  color: var(--muted-foreground);
  font-size: var(--text-sm);
}

.gallery-dialog__badges {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  margin-top: 1rem;
}

/* === Badges === */
.labeled-badge {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.labeled-badge__label {
  font-size: var(--text-sm);
  font-weight: 500;
}

.badge {
  display: inline-flex;
  align-items: center;
  min-height: 1.5rem;
  padding: 0.125rem 0.625rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  font-weight: 600;
}

.badge-default {
  background: var(--primary);
  color: var(--primary-foreground);
  border: 1px solid var(--primary);
}

.badge-secondary {
  background: var(--secondary);
  color: var(--secondary-foreground);
  border: 1px solid var(--secondary);
}

.badge-outline {
  background: transparent;
  color: var(--foreground);
  border: 1px solid var(--border);
}

/* === Icon Buttons === */
.gallery-dialog__close-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  border: none;
  border-radius: 999px;
  background: rgba(255, 255, 255, 0.85);
  color: var(--foreground);
  font-size: var(--text-xl);
  line-height: 1;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.gallery-dialog__close-btn:hover {
  background: var(--secondary);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Responsive === */
@media (min-width: 640px) {
  .filter-bar__grid { grid-template-columns: repeat(2, 1fr); }
  .gallery-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 768px) {
  .filter-bar__grid { grid-template-columns: repeat(3, 1fr); }
  .gallery-grid { grid-template-columns: repeat(3, 1fr); }
}

@media (min-width: 1024px) {
  .filter-bar__grid { grid-template-columns: repeat(5, 1fr); }
  .gallery-dialog__body { flex-direction: row; }
  .gallery-dialog__media { width: 66%; }
  .gallery-dialog__info { width: 34%; }
  .gallery-dialog__img { border-radius: var(--radius) 0 0 var(--radius); }
}
"#;
