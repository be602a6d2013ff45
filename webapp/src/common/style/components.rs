pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-md);
  font-weight: 600;
  cursor: pointer;
  border: 2px solid transparent;
  transition: background-color var(--transition-fast) var(--easing-standard),
              color var(--transition-fast) var(--easing-standard);
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
  text-decoration: none;
}

.btn-outline {
  background-color: transparent;
  border-color: var(--primary);
  color: var(--primary);
}

.btn-outline:hover {
  background-color: var(--primary);
  color: var(--text-inverse);
}

/* Contact form */
.contact-form {
  display: grid;
  gap: var(--space-4);
}

.form-group label {
  display: block;
  margin-bottom: var(--space-2);
  font-weight: 500;
  color: var(--text-secondary);
}

.form-group input,
.form-group textarea {
  width: 100%;
  padding: var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  font: inherit;
  transition: border-color var(--transition-fast) var(--easing-standard);
}

.form-group textarea {
  min-height: 140px;
  resize: vertical;
}

.error-message {
  display: block;
  min-height: 1.25em;
  margin-top: var(--space-1);
  font-size: 0.875rem;
  color: var(--error);
}

.form-success {
  display: none;
  padding: var(--space-8);
  border-radius: var(--radius-lg);
  background-color: rgba(16, 185, 129, 0.1);
  color: var(--graphite);
  text-align: center;
}

/* Project modal */
.modal {
  display: none;
  position: fixed;
  inset: 0;
  z-index: 100;
  align-items: center;
  justify-content: center;
  padding: var(--space-4);
  background-color: rgba(17, 24, 39, 0.6);
}

.modal-content {
  position: relative;
  width: 100%;
  max-width: 720px;
  max-height: 90vh;
  overflow-y: auto;
  padding: var(--space-8);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow-lg);
}

.modal-close {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
  border: none;
  background: none;
  font-size: 1.75rem;
  line-height: 1;
  cursor: pointer;
  color: var(--text-secondary);
}

.modal-body h2 {
  margin-bottom: var(--space-4);
}

.modal-body h3 {
  margin: var(--space-6) 0 var(--space-3);
}

.modal-description {
  color: var(--text-secondary);
}

.modal-features {
  margin-bottom: 20px;
  list-style: none;
}

.modal-features li {
  margin-bottom: 8px;
  position: relative;
  padding-left: 24px;
}

.modal-features li::before {
  content: '✓';
  position: absolute;
  left: 0;
  color: var(--green);
  font-weight: bold;
  font-size: 1.1rem;
}

.modal-tech {
  margin-bottom: 25px;
}

.tech-tag {
  display: inline-block;
  background-color: var(--light-gray);
  color: var(--graphite);
  padding: 6px 12px;
  border-radius: 20px;
  font-size: 0.875rem;
  margin-right: 8px;
  margin-bottom: 8px;
  font-weight: 500;
}

.modal-actions {
  margin-top: 30px;
  display: flex;
  gap: 12px;
  flex-wrap: wrap;
}

.modal-actions .modal-close {
  position: static;
  font-size: 1rem;
  color: var(--primary);
}

@media (max-width: 768px) {
  .modal-actions {
    flex-direction: column;
  }

  .modal-actions .btn {
    width: 100%;
  }
}
"#;
